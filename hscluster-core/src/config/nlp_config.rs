//! Entity recognition configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the entity recognizer warm-up.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NlpConfig {
    /// Run a sample recognition before the first real document. Default: true.
    pub warm_up: Option<bool>,
    /// Text used for the warm-up. Default: `"foo bar"`.
    pub warm_up_text: Option<String>,
}

impl NlpConfig {
    pub fn effective_warm_up(&self) -> bool {
        self.warm_up.unwrap_or(true)
    }

    pub fn effective_warm_up_text(&self) -> &str {
        self.warm_up_text.as_deref().unwrap_or("foo bar")
    }
}
