use thiserror::Error;
use crate::enums::chat_error::ChatError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Chat(#[from] ChatError),

    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError { path: String, reason: String },

    #[error("Invalid configuration:\n  - {}", .errors.join("\n  - "))]
    ValidationError { errors: Vec<String> },

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn config_file_error(path: &std::path::Path, reason: impl ToString) -> Self {
        Self::ConfigurationFileError {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for chat-invoker operations
pub type AppResult<T> = Result<T, AppError>;

pub struct ErrorHandler;

impl ErrorHandler {
    /// Prints the plain message to stderr; the technical form only at debug level.
    pub fn handle_error(error: &AppError) {
        log::debug!("{:?}", error);
        eprintln!("{}", Self::diagnostic(error));
    }

    /// The one line shown to the user when a command fails.
    pub fn diagnostic(error: &AppError) -> String {
        error.to_string()
    }
}
