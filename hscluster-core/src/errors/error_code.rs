//! Stable error codes attached to every hscluster error.

/// Trait giving each error enum a structured code string.
/// Every error enum must implement this so hosts can branch on the code
/// without parsing messages.
pub trait HsclusterErrorCode {
    /// Returns the error code string (e.g., "INVALID_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const DEGENERATE_INPUT: &str = "DEGENERATE_INPUT";
pub const EMPTY_IDENTIFIER: &str = "EMPTY_IDENTIFIER";
pub const RECOGNIZER_FAILED: &str = "RECOGNIZER_FAILED";
pub const INVALID_SPAN: &str = "INVALID_SPAN";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
