use axum::{
    body::Bytes,
    extract::State,
    routing::{any, post},
    Json, Router,
};
use icebreaker_core::{ChatProvider, GenerateError, GenerateRequest, GenerateResponse};
use serde_json::{json, Value};

use crate::{rejections::AppError, AppState};

pub fn routes<P>() -> Router<AppState<P>>
where
    P: ChatProvider + 'static,
{
    Router::new()
        .route(
            "/generate-question",
            post(generate_question::<P>).fallback(method_not_allowed),
        )
        .route("/echo", any(echo))
}

async fn generate_question<P: ChatProvider>(
    State(state): State<AppState<P>>,
    body: Bytes,
) -> Result<Json<GenerateResponse>, AppError> {
    // Decoded by hand so every malformed body maps to the same 400.
    let request: GenerateRequest = serde_json::from_slice(&body).map_err(|err| {
        tracing::debug!("rejecting generate request body: {}", err);
        GenerateError::InvalidInput
    })?;

    tracing::info!(examples = request.examples.len(), "generating question");
    let question = state.generator.generate(&request.examples).await?;
    tracing::debug!(%question, "generated question");

    Ok(Json(GenerateResponse { question }))
}

/// Echo any body back; bodies that are not JSON come back as a string.
async fn echo(body: Bytes) -> Json<Value> {
    let body: Value = serde_json::from_slice(&body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()));
    tracing::info!("echo: {}", body);
    Json(json!({ "message": "Received", "data": body }))
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
