use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use anyhow::anyhow;
use icebreaker_core::{ChatProvider, ChatRequest, ChatResponse, QuestionGenerator};
use icebreaker_server::{router, AppState};
use serde_json::{json, Value};

/// Provider that answers every call with one canned reply.
pub struct ScriptedProvider {
    reply: Mutex<Result<Value, String>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedProvider {
    pub fn replying(reply: Value) -> Self {
        Self::new(Ok(reply))
    }

    pub fn failing(message: &str) -> Self {
        Self::new(Err(message.to_string()))
    }

    pub fn unused() -> Self {
        Self::failing("provider should not be called")
    }

    fn new(reply: Result<Value, String>) -> Self {
        Self {
            reply: Mutex::new(reply),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl ChatProvider for ScriptedProvider {
    async fn complete(&self, _request: &ChatRequest) -> anyhow::Result<ChatResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.reply.lock().unwrap().clone();
        match reply {
            Ok(value) => Ok(serde_json::from_value(value)?),
            Err(message) => Err(anyhow!(message)),
        }
    }
}

pub fn function_reply(arguments: &str) -> Value {
    json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "content": null,
                "function_call": { "name": "generate_question", "arguments": arguments }
            }
        }]
    })
}

pub fn app(provider: ScriptedProvider) -> axum::Router {
    router(AppState::new(QuestionGenerator::new(provider)))
}
