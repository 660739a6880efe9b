//! Error types for complexity-core
//!
//! Estimation and highlighting are total; only the edges (reading input,
//! loading configuration, emitting a report) can fail.

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for complexity-core operations
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Report serialization error
    #[error("Report error: {0}")]
    Report(String),
}

impl EstimatorError {
    /// Create a report error
    pub fn report(msg: impl Into<String>) -> Self {
        EstimatorError::Report(msg.into())
    }
}

impl From<serde_json::Error> for EstimatorError {
    fn from(err: serde_json::Error) -> Self {
        EstimatorError::Report(err.to_string())
    }
}

/// Result type alias for complexity-core operations
pub type Result<T> = std::result::Result<T, EstimatorError>;
