//! Outlier detection errors.

use super::error_code::{self, HsclusterErrorCode};

/// Errors that can occur during outlier detection.
///
/// All variants are local validation failures: detection either returns a
/// complete result or one of these, never a partial result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OutlierError {
    /// The sequence is too short for the requested statistic.
    #[error("{method} needs at least {required} values, got {actual}")]
    InvalidInput {
        method: &'static str,
        required: usize,
        actual: usize,
    },

    /// Multi-dimensional points do not share one dimensionality.
    #[error("row {row} has {actual} coordinates, expected {expected}")]
    RaggedRows {
        expected: usize,
        row: usize,
        actual: usize,
    },

    /// The statistic is undefined for this input (e.g. zero spread).
    #[error("{method} is undefined for this input: {reason}")]
    DegenerateInput {
        method: &'static str,
        reason: &'static str,
    },
}

impl OutlierError {
    /// Shorthand for a length check failure.
    pub fn too_short(method: &'static str, required: usize, actual: usize) -> Self {
        Self::InvalidInput {
            method,
            required,
            actual,
        }
    }
}

impl HsclusterErrorCode for OutlierError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } | Self::RaggedRows { .. } => error_code::INVALID_INPUT,
            Self::DegenerateInput { .. } => error_code::DEGENERATE_INPUT,
        }
    }
}

