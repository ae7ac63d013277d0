use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use anyhow::{Result, anyhow};

use crate::prompt::{system_prompt, USER_PROMPT};
use crate::provider::ChatProvider;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4-0613";
pub const GENERATE_FUNCTION: &str = "generate_question";

#[derive(Debug, Clone, Serialize)]
pub struct OpenAIMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionChoice {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<OpenAIMessage>,
    pub functions: Vec<FunctionDefinition>,
    pub function_call: FunctionChoice,
}

impl ChatRequest {
    /// Request that forces the model to answer through the
    /// `generate_question` function with a single `question` argument.
    pub fn generate_question(model: &str, examples: &[String]) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                OpenAIMessage {
                    role: "system".to_string(),
                    content: system_prompt(examples),
                },
                OpenAIMessage {
                    role: "user".to_string(),
                    content: USER_PROMPT.to_string(),
                },
            ],
            functions: vec![FunctionDefinition {
                name: GENERATE_FUNCTION.to_string(),
                description: "Generates a single, meaningful question to spark conversation."
                    .to_string(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "question": {
                            "type": "string",
                            "description": "A single, plain text question designed to spark meaningful conversation"
                        }
                    },
                    "required": ["question"]
                }),
            }],
            function_call: FunctionChoice {
                name: GENERATE_FUNCTION.to_string(),
            },
        }
    }
}

// Every level is optional: the reply is validated by the generator, not by serde.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub function_call: Option<FunctionCall>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionCall {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub arguments: Option<String>,
}

impl ChatResponse {
    /// Raw arguments of the first choice's function call, if the model made one.
    pub fn function_arguments(&self) -> Option<&str> {
        self.choices
            .first()?
            .message
            .as_ref()?
            .function_call
            .as_ref()?
            .arguments
            .as_deref()
            .filter(|args| !args.is_empty())
    }
}

#[derive(Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    api_base: String,
}

impl OpenAIClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, DEFAULT_API_BASE)
    }

    pub fn with_base_url(api_key: &str, api_base: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.trim().to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let url = format!("{}/chat/completions", self.api_base);
        tracing::debug!(model = %request.model, %url, "sending chat completion request");

        let response = self.client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!("OpenAI API error {}: {}", status, text));
        }

        let chat_response: ChatResponse = response.json().await?;
        Ok(chat_response)
    }
}

impl ChatProvider for OpenAIClient {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.chat(request).await
    }
}
