use std::error::Error as StdError;
use thiserror::Error;

/// Failure of one call to the text-generation service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AiProviderError {
    #[error("Anthropic API Error: {0}")]
    ApiError(String),

    #[error("Network Error: {0}")]
    NetworkError(String),

    #[error("Serialization Error: {0}")]
    SerializationError(String),

    #[error("Authentication Error: {0}")]
    AuthenticationError(String),

    #[error("Rate Limit Error: {0}")]
    RateLimitError(String),
}

impl AiProviderError {
    /// Transport failure, with every `source()` appended after `": "`.
    pub fn network(error: &dyn StdError) -> Self {
        Self::NetworkError(error_chain(error))
    }
}

fn error_chain(error: &dyn StdError) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.ends_with(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}
