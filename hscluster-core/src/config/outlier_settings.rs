//! Outlier detection configuration.

use serde::{Deserialize, Serialize};

/// Method names accepted in `[outliers] method`.
pub const OUTLIER_METHODS: &[&str] = &["jump", "quartile", "mad"];

/// Values accepted in `[outliers] zero_spread`.
pub const ZERO_SPREAD_POLICIES: &[&str] = &["reject", "inlier"];

/// Configuration for the outlier detectors.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutlierSettings {
    /// Detection method: `jump`, `quartile`, or `mad`. Default: `quartile`.
    pub method: Option<String>,
    /// IQR multiplier above Q3. Default: 2.0.
    pub quartile_threshold: Option<f64>,
    /// Modified z-score cutoff. Default: 2.5.
    pub mad_threshold: Option<f64>,
    /// What MAD does when the spread is zero: `reject` or `inlier`. Default: `reject`.
    pub zero_spread: Option<String>,
}

impl OutlierSettings {
    /// Returns the effective method name, defaulting to `quartile`.
    pub fn effective_method(&self) -> &str {
        self.method.as_deref().unwrap_or("quartile")
    }

    /// Returns the effective quartile threshold, defaulting to 2.0.
    pub fn effective_quartile_threshold(&self) -> f64 {
        self.quartile_threshold.unwrap_or(2.0)
    }

    /// Returns the effective MAD threshold, defaulting to 2.5.
    pub fn effective_mad_threshold(&self) -> f64 {
        self.mad_threshold.unwrap_or(2.5)
    }

    /// Returns the effective zero-spread policy name, defaulting to `reject`.
    pub fn effective_zero_spread(&self) -> &str {
        self.zero_spread.as_deref().unwrap_or("reject")
    }
}
