//! Entity value type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named entity, compared by normalized name and label.
///
/// The name is trimmed and lowercased on construction, so `" Paris "` and
/// `"paris"` with the same label are the same entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    name: String,
    label: String,
}

impl Entity {
    pub fn new(name: &str, label: impl Into<String>) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            label: label.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.label)
    }
}

/// One recognizer hit: a byte range into the analyzed text plus a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

impl EntitySpan {
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// The covered text, or `None` if the range is out of bounds or not on
    /// char boundaries.
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}
