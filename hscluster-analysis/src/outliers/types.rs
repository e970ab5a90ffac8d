//! Core types for outlier detection.

use std::fmt;
use std::str::FromStr;

use hscluster_core::errors::ConfigError;
use serde::{Deserialize, Serialize};

use super::mad::DEFAULT_MAD_THRESHOLD;
use super::quartile::DEFAULT_QUARTILE_THRESHOLD;

/// A value flagged as an upper outlier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierResult {
    /// Index into the original values array.
    pub index: usize,
    /// The value that was flagged.
    pub value: f64,
    /// Method-specific statistic: boundary jump score, IQR units above the
    /// fence, or modified z-score.
    pub test_statistic: f64,
    /// Method that flagged this value.
    pub method: OutlierMethod,
}

/// Statistical method used for outlier detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlierMethod {
    Jump,
    #[default]
    Quartile,
    Mad,
}

impl OutlierMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Jump => "jump",
            Self::Quartile => "quartile",
            Self::Mad => "mad",
        }
    }
}

impl fmt::Display for OutlierMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutlierMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jump" => Ok(Self::Jump),
            "quartile" => Ok(Self::Quartile),
            "mad" => Ok(Self::Mad),
            other => Err(ConfigError::InvalidValue {
                field: "outliers.method".to_string(),
                message: format!("unknown method '{other}'"),
            }),
        }
    }
}

/// What the MAD method does when the median absolute deviation is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroSpreadPolicy {
    /// Fail with `DegenerateInput`.
    #[default]
    Reject,
    /// Points at distance 0 are inliers; any positive distance scores infinity.
    TreatAsInlier,
}

impl ZeroSpreadPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::TreatAsInlier => "inlier",
        }
    }
}

impl fmt::Display for ZeroSpreadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZeroSpreadPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(Self::Reject),
            "inlier" => Ok(Self::TreatAsInlier),
            other => Err(ConfigError::InvalidValue {
                field: "outliers.zero_spread".to_string(),
                message: format!("unknown policy '{other}'"),
            }),
        }
    }
}

/// Configuration for [`OutlierDetector`](super::OutlierDetector).
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierConfig {
    /// Method to run (default: quartile).
    pub method: OutlierMethod,
    /// IQR multiplier above Q3 (default: 2.0).
    pub quartile_threshold: f64,
    /// Modified z-score cutoff (default: 2.5).
    pub mad_threshold: f64,
    /// Zero-spread handling for MAD (default: reject).
    pub zero_spread: ZeroSpreadPolicy,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            method: OutlierMethod::default(),
            quartile_threshold: DEFAULT_QUARTILE_THRESHOLD,
            mad_threshold: DEFAULT_MAD_THRESHOLD,
            zero_spread: ZeroSpreadPolicy::default(),
        }
    }
}
