use thiserror::Error;
use crate::enums::ai_provider_error::AiProviderError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// The provider call failed. Shown verbatim.
    #[error(transparent)]
    Provider(#[from] AiProviderError),

    #[error("response contained no content blocks")]
    EmptyContent,

    #[error("expected a text block first in the response, got '{kind}'")]
    UnexpectedContent { kind: String },
}
