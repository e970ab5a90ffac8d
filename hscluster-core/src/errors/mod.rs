//! Error handling for hscluster.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod document_error;
pub mod error_code;
pub mod outlier_error;

pub use config_error::ConfigError;
pub use document_error::DocumentError;
pub use error_code::HsclusterErrorCode;
pub use outlier_error::OutlierError;
