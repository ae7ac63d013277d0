use std::future::Future;

use anyhow::Result;

use crate::openai::{ChatRequest, ChatResponse};

/// A chat-completion backend the generator can talk to.
pub trait ChatProvider: Send + Sync {
    fn complete(&self, request: &ChatRequest) -> impl Future<Output = Result<ChatResponse>> + Send;
}
