use anyhow::{anyhow, Result};
use icebreaker_core::GenerateRequest;
use reqwest::Client;
use serde_json::Value;

/// Shown when the service could not be reached or answered with garbage.
pub const FETCH_FAILED: &str = "Failed to fetch question.";
/// Shown when the service failed without saying why.
pub const UNKNOWN_FAILURE: &str = "Something went wrong.";

/// Talks to the question service's `/generate-question` endpoint.
#[derive(Clone)]
pub struct QuestionClient {
    client: Client,
    base_url: String,
}

impl QuestionClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Ask the service for a new question in the style of `examples`.
    ///
    /// Errors carry the text to show the user.
    pub async fn generate(&self, examples: Vec<String>) -> Result<String> {
        let url = format!("{}/generate-question", self.base_url);
        let request = GenerateRequest { examples };

        let response = match self.client.post(&url).json(&request).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("question request to {} failed: {}", url, err);
                return Err(anyhow!(FETCH_FAILED));
            }
        };

        let status = response.status();
        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(err) => {
                tracing::error!("unreadable response from {} ({}): {}", url, status, err);
                return Err(anyhow!(FETCH_FAILED));
            }
        };

        if status.is_success() {
            return body
                .get("question")
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| anyhow!(FETCH_FAILED));
        }

        let message = body
            .get("error")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .unwrap_or(UNKNOWN_FAILURE);
        tracing::warn!(%status, "question service returned an error: {}", message);
        Err(anyhow!(message.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::json;

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_returns_question_on_success() {
        let app = Router::new().route(
            "/generate-question",
            post(|Json(body): Json<Value>| async move {
                let count = body["examples"].as_array().map(Vec::len).unwrap_or_default();
                Json(json!({ "question": format!("Generated from {} examples", count) }))
            }),
        );
        let client = QuestionClient::new(&spawn(app).await);

        let question = client
            .generate(vec!["a".to_string(), "b".to_string()])
            .await
            .unwrap();
        assert_eq!(question, "Generated from 2 examples");
    }

    #[tokio::test]
    async fn test_surfaces_service_error_text() {
        let app = Router::new().route(
            "/generate-question",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid examples" })),
                )
            }),
        );
        let client = QuestionClient::new(&spawn(app).await);

        let err = client.generate(Vec::new()).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid examples");
    }

    #[tokio::test]
    async fn test_error_without_message_is_generic() {
        let app = Router::new().route(
            "/generate-question",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))) }),
        );
        let client = QuestionClient::new(&spawn(app).await);

        let err = client.generate(vec!["a".to_string()]).await.unwrap_err();
        assert_eq!(err.to_string(), UNKNOWN_FAILURE);
    }

    #[tokio::test]
    async fn test_non_json_reply_is_fetch_failure() {
        let app = Router::new().route("/generate-question", post(|| async { "oops" }));
        let client = QuestionClient::new(&spawn(app).await);

        let err = client.generate(vec!["a".to_string()]).await.unwrap_err();
        assert_eq!(err.to_string(), FETCH_FAILED);
    }
}
