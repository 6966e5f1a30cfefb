//! Custom error types for Resume Righter
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::api::ApiError;

/// The main error type for Resume Righter operations
#[derive(Error, Debug)]
pub enum RighterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Backend request failures
    #[error("Backend error: {0}")]
    Api(#[from] ApiError),

    /// The selected resume file could not be used
    #[error("Upload error: {0}")]
    Upload(String),

    /// The generated document could not be saved
    #[error("Download error: {0}")]
    Download(String),

    /// Terminal setup, drawing or teardown failed
    #[error("TUI error: {0}")]
    Tui(String),
}

impl From<std::io::Error> for RighterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RighterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Resume Righter operations
pub type RighterResult<T> = Result<T, RighterError>;
