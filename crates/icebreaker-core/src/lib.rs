pub mod config;
pub mod deck;
pub mod error;
pub mod generator;
pub mod openai;
pub mod prompt;
pub mod provider;
pub mod seed;

// Re-export main types for convenience
pub use config::Config;
pub use deck::{Deck, DeckError, LikedHistory, ReplaceTicket, MAX_LIKED, NO_MORE_QUESTIONS};
pub use error::GenerateError;
pub use generator::{GenerateRequest, GenerateResponse, QuestionGenerator};
pub use openai::{ChatRequest, ChatResponse, OpenAIClient};
pub use provider::ChatProvider;
