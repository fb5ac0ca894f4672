//! Error types for configuration loading
//!
//! The simulation itself has no recoverable errors; invariant violations
//! panic. Only reading settings can fail.

use thiserror::Error;

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors that can occur while loading [`crate::Settings`]
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}
