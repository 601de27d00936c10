//! Error types for label cleaning configuration.

use thiserror::Error;

/// Errors raised while building a cleaning configuration.
///
/// Cleaning itself never fails; only loading a configuration document can.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON or has mistyped fields.
    #[error("invalid cleaning configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
