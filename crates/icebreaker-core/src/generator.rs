//! Question generation: prompt in, one validated question out.

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;
use crate::openai::{ChatRequest, ChatResponse, DEFAULT_MODEL};
use crate::provider::ChatProvider;

/// Body of a generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub examples: Vec<String>,
}

/// Body of a successful generation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub question: String,
}

#[derive(Deserialize)]
struct QuestionArguments {
    question: String,
}

#[derive(Clone)]
pub struct QuestionGenerator<P> {
    provider: P,
    model: String,
}

impl<P: ChatProvider> QuestionGenerator<P> {
    pub fn new(provider: P) -> Self {
        Self::with_model(provider, DEFAULT_MODEL)
    }

    pub fn with_model(provider: P, model: &str) -> Self {
        Self {
            provider,
            model: model.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn generate(&self, examples: &[String]) -> Result<String, GenerateError> {
        if examples.is_empty() {
            return Err(GenerateError::InvalidInput);
        }

        let request = ChatRequest::generate_question(&self.model, examples);
        let response = self.provider.complete(&request).await.map_err(|err| {
            tracing::error!("Error generating response: {:#}", err);
            GenerateError::Failed(err)
        })?;

        extract_question(&response)
    }
}

/// Pull the `question` argument out of a function-call reply.
pub fn extract_question(response: &ChatResponse) -> Result<String, GenerateError> {
    let arguments = response.function_arguments().ok_or_else(|| {
        tracing::warn!("provider reply carried no function call arguments");
        GenerateError::UpstreamResponseInvalid
    })?;

    let parsed: QuestionArguments = serde_json::from_str(arguments).map_err(|err| {
        tracing::error!("Error parsing function call arguments: {}", err);
        GenerateError::Parse(err)
    })?;

    let question = parsed.question.trim();
    if question.is_empty() {
        tracing::warn!("provider returned an empty question");
        return Err(GenerateError::UpstreamResponseInvalid);
    }
    Ok(question.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use serde_json::json;
    use std::sync::Mutex;

    struct ScriptedProvider {
        reply: Mutex<Option<anyhow::Result<ChatResponse>>>,
        seen: Mutex<Vec<ChatRequest>>,
    }

    impl ScriptedProvider {
        fn replying(reply: serde_json::Value) -> Self {
            Self::with(Ok(serde_json::from_value(reply).unwrap()))
        }

        fn with(reply: anyhow::Result<ChatResponse>) -> Self {
            Self {
                reply: Mutex::new(Some(reply)),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl ChatProvider for ScriptedProvider {
        async fn complete(&self, request: &ChatRequest) -> anyhow::Result<ChatResponse> {
            self.seen.lock().unwrap().push(request.clone());
            self.reply
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(anyhow!("no scripted reply left")))
        }
    }

    fn function_reply(arguments: &str) -> serde_json::Value {
        json!({
            "choices": [{
                "message": {
                    "function_call": { "name": "generate_question", "arguments": arguments }
                }
            }]
        })
    }

    fn examples() -> Vec<String> {
        vec!["What gives you energy?".to_string()]
    }

    #[tokio::test]
    async fn test_trims_generated_question() {
        let generator = QuestionGenerator::new(ScriptedProvider::replying(function_reply(
            "{\"question\":\" What gives you hope? \"}",
        )));
        let question = generator.generate(&examples()).await.unwrap();
        assert_eq!(question, "What gives you hope?");
    }

    #[tokio::test]
    async fn test_sends_examples_in_system_prompt() {
        let provider = ScriptedProvider::replying(function_reply("{\"question\":\"Q?\"}"));
        let generator = QuestionGenerator::with_model(provider, "gpt-test");
        generator.generate(&examples()).await.unwrap();

        let seen = generator.provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].model, "gpt-test");
        assert!(seen[0].messages[0].content.contains("1. What gives you energy?"));
    }

    #[tokio::test]
    async fn test_empty_examples_never_reach_provider() {
        let generator = QuestionGenerator::new(ScriptedProvider::with(Err(anyhow!("unused"))));
        let err = generator.generate(&[]).await.unwrap_err();
        assert!(matches!(err, GenerateError::InvalidInput));
        assert!(generator.provider.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_function_call_is_upstream_invalid() {
        let generator = QuestionGenerator::new(ScriptedProvider::replying(json!({
            "choices": [{ "message": { "content": "What gives you hope?" } }]
        })));
        let err = generator.generate(&examples()).await.unwrap_err();
        assert!(matches!(err, GenerateError::UpstreamResponseInvalid));
        assert_eq!(err.to_string(), "No valid response from OpenAI");
    }

    #[tokio::test]
    async fn test_no_choices_is_upstream_invalid() {
        let generator = QuestionGenerator::new(ScriptedProvider::replying(json!({ "choices": [] })));
        let err = generator.generate(&examples()).await.unwrap_err();
        assert!(matches!(err, GenerateError::UpstreamResponseInvalid));
    }

    #[tokio::test]
    async fn test_malformed_arguments_are_parse_errors() {
        for arguments in ["{not json", "{\"answer\":\"x\"}", "{\"question\":42}"] {
            let generator =
                QuestionGenerator::new(ScriptedProvider::replying(function_reply(arguments)));
            let err = generator.generate(&examples()).await.unwrap_err();
            assert!(matches!(err, GenerateError::Parse(_)), "arguments: {}", arguments);
            assert_eq!(err.to_string(), "Failed to parse response from OpenAI");
        }
    }

    #[tokio::test]
    async fn test_blank_question_is_upstream_invalid() {
        let generator =
            QuestionGenerator::new(ScriptedProvider::replying(function_reply("{\"question\":\"   \"}")));
        let err = generator.generate(&examples()).await.unwrap_err();
        assert!(matches!(err, GenerateError::UpstreamResponseInvalid));
    }

    #[tokio::test]
    async fn test_provider_failure_is_generation_failure() {
        let generator =
            QuestionGenerator::new(ScriptedProvider::with(Err(anyhow!("connection refused"))));
        let err = generator.generate(&examples()).await.unwrap_err();
        assert!(matches!(err, GenerateError::Failed(_)));
        assert_eq!(err.to_string(), "Failed to generate response");
    }
}
