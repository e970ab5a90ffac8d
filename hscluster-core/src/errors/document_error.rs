//! Document and entity recognition errors.

use super::error_code::{self, HsclusterErrorCode};

/// Errors raised while wrapping raw text into a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("Document identifier must not be empty")]
    EmptyIdentifier,

    #[error("Recognizer {recognizer} failed: {message}")]
    RecognizerFailed { recognizer: String, message: String },

    #[error("Entity span {start}..{end} is out of bounds for text of length {len}")]
    InvalidSpan { start: usize, end: usize, len: usize },
}

impl HsclusterErrorCode for DocumentError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyIdentifier => error_code::EMPTY_IDENTIFIER,
            Self::RecognizerFailed { .. } => error_code::RECOGNIZER_FAILED,
            Self::InvalidSpan { .. } => error_code::INVALID_SPAN,
        }
    }
}
