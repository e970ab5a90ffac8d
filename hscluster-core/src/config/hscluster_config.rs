//! Top-level hscluster configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::outlier_settings::{OUTLIER_METHODS, ZERO_SPREAD_POLICIES};
use super::{NlpConfig, OutlierSettings};
use crate::errors::ConfigError;

/// Project config file name looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "hscluster.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`HSCLUSTER_*`)
/// 3. Project config (`hscluster.toml` in project root)
/// 4. User config (`~/.hscluster/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HsclusterConfig {
    pub outliers: OutlierSettings,
    pub nlp: NlpConfig,
}

/// Host-supplied overrides that win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub outlier_method: Option<String>,
    pub quartile_threshold: Option<f64>,
    pub mad_threshold: Option<f64>,
    pub zero_spread: Option<String>,
    pub warm_up: Option<bool>,
    pub warm_up_text: Option<String>,
}

impl HsclusterConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(path = %user_config_path.display(), error = %e, "ignoring user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        tracing::debug!(
            method = config.outliers.effective_method(),
            warm_up = config.nlp.effective_warm_up(),
            "configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &HsclusterConfig) -> Result<(), ConfigError> {
        if let Some(ref method) = config.outliers.method {
            if !OUTLIER_METHODS.contains(&method.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "outliers.method".to_string(),
                    message: format!("unknown method '{method}', expected one of {OUTLIER_METHODS:?}"),
                });
            }
        }
        if let Some(ref policy) = config.outliers.zero_spread {
            if !ZERO_SPREAD_POLICIES.contains(&policy.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "outliers.zero_spread".to_string(),
                    message: format!("unknown policy '{policy}', expected one of {ZERO_SPREAD_POLICIES:?}"),
                });
            }
        }
        for (field, value) in [
            ("outliers.quartile_threshold", config.outliers.quartile_threshold),
            ("outliers.mad_threshold", config.outliers.mad_threshold),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be a finite number >= 0".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut HsclusterConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: HsclusterConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some` value.
    fn merge(base: &mut HsclusterConfig, other: &HsclusterConfig) {
        if other.outliers.method.is_some() {
            base.outliers.method = other.outliers.method.clone();
        }
        if other.outliers.quartile_threshold.is_some() {
            base.outliers.quartile_threshold = other.outliers.quartile_threshold;
        }
        if other.outliers.mad_threshold.is_some() {
            base.outliers.mad_threshold = other.outliers.mad_threshold;
        }
        if other.outliers.zero_spread.is_some() {
            base.outliers.zero_spread = other.outliers.zero_spread.clone();
        }

        if other.nlp.warm_up.is_some() {
            base.nlp.warm_up = other.nlp.warm_up;
        }
        if other.nlp.warm_up_text.is_some() {
            base.nlp.warm_up_text = other.nlp.warm_up_text.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `HSCLUSTER_OUTLIER_METHOD`, `HSCLUSTER_MAD_THRESHOLD`, etc.
    fn apply_env_overrides(config: &mut HsclusterConfig) {
        if let Ok(val) = std::env::var("HSCLUSTER_OUTLIER_METHOD") {
            config.outliers.method = Some(val);
        }
        if let Ok(val) = std::env::var("HSCLUSTER_QUARTILE_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.outliers.quartile_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("HSCLUSTER_MAD_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.outliers.mad_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("HSCLUSTER_ZERO_SPREAD") {
            config.outliers.zero_spread = Some(val);
        }
        if let Ok(val) = std::env::var("HSCLUSTER_NLP_WARM_UP") {
            if let Ok(v) = val.parse::<bool>() {
                config.nlp.warm_up = Some(v);
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut HsclusterConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.outlier_method {
            config.outliers.method = Some(v.clone());
        }
        if let Some(v) = overrides.quartile_threshold {
            config.outliers.quartile_threshold = Some(v);
        }
        if let Some(v) = overrides.mad_threshold {
            config.outliers.mad_threshold = Some(v);
        }
        if let Some(ref v) = overrides.zero_spread {
            config.outliers.zero_spread = Some(v.clone());
        }
        if let Some(v) = overrides.warm_up {
            config.nlp.warm_up = Some(v);
        }
        if let Some(ref v) = overrides.warm_up_text {
            config.nlp.warm_up_text = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user config path: `~/.hscluster/config.toml`.
fn user_config_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".hscluster").join("config.toml"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
