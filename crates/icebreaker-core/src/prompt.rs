/// User turn sent alongside the system prompt.
pub const USER_PROMPT: &str = "Generate a question.";

/// Build the system prompt that steers generation, with the given examples
/// rendered as a numbered list.
pub fn system_prompt(examples: &[String]) -> String {
    let numbered = examples
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. {}", i + 1, q))
        .collect::<Vec<_>>()
        .join("\n");

    let mut prompt = String::new();
    prompt.push_str("Your job is to create a good meaningful question to spark conversation. \n");
    prompt.push_str(
        "A good question typically has one, or usually more, of the following key properties:\n\n",
    );
    prompt.push_str("1. Nostalgia\n");
    prompt.push_str("2. Novelty\n");
    prompt.push_str("3. Emotion - positive and negative\n");
    prompt.push_str("4. An opinion/view\n");
    prompt.push_str("5. Self-reflection\n");
    prompt.push_str("6. Own perception of self\n");
    prompt.push_str("7. Others perception of self\n");
    prompt.push_str("8. Vulnerability\n\n");
    prompt.push_str("Attached below are some examples of good questions. ");
    prompt.push_str("Use these as reference, but do not overfit to these questions:\n\n");
    prompt.push_str(&numbered);
    prompt.push_str("\n\nRespond with only the question, nothing else.");

    prompt.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples_are_numbered_in_order() {
        let examples = vec!["First?".to_string(), "Second?".to_string()];
        let prompt = system_prompt(&examples);
        assert!(prompt.contains("\n\n1. First?\n2. Second?\n\n"));
    }

    #[test]
    fn test_prompt_structure() {
        let prompt = system_prompt(&["Why?".to_string()]);
        assert!(prompt.starts_with("Your job is to create a good meaningful question"));
        assert!(prompt.contains("key properties:\n\n1. Nostalgia\n"));
        assert!(prompt.contains("\n8. Vulnerability\n\nAttached below are some examples"));
        assert!(prompt.ends_with("Respond with only the question, nothing else."));
    }
}
