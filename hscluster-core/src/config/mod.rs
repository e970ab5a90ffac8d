//! Configuration system for hscluster.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod hscluster_config;
pub mod nlp_config;
pub mod outlier_settings;

pub use hscluster_config::{ConfigOverrides, HsclusterConfig};
pub use nlp_config::NlpConfig;
pub use outlier_settings::OutlierSettings;
