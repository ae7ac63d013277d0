use thiserror::Error;

/// Ways a question generation request can fail.
///
/// `Display` gives the fixed message callers see; provider details stay in
/// the logs.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Invalid examples")]
    InvalidInput,

    #[error("No valid response from OpenAI")]
    UpstreamResponseInvalid,

    #[error("Failed to parse response from OpenAI")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to generate response")]
    Failed(#[source] anyhow::Error),
}

impl GenerateError {
    /// Client-input errors are fixed by correcting the request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, GenerateError::InvalidInput)
    }
}
