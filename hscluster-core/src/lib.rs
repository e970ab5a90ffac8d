//! Shared foundations for hscluster: error enums, layered configuration,
//! and tracing setup.

pub mod config;
pub mod errors;
pub mod tracing;
