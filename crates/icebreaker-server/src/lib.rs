pub mod handlers;
pub mod rejections;

use std::sync::Arc;

use axum::Router;
use icebreaker_core::{ChatProvider, QuestionGenerator};

pub struct AppState<P> {
    pub generator: Arc<QuestionGenerator<P>>,
}

impl<P> AppState<P> {
    pub fn new(generator: QuestionGenerator<P>) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}

// Manual impl: cloning the state only clones the Arc, so P need not be Clone.
impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
        }
    }
}

pub fn router<P>(state: AppState<P>) -> Router
where
    P: ChatProvider + 'static,
{
    Router::new()
        .merge(handlers::routes::<P>())
        .fallback(handlers::not_found)
        .with_state(state)
}
