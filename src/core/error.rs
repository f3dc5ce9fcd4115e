//! Error types and error handling for reqtable.
//!
//! This module defines the error types used throughout the crate.
//! The request formatter never lets these escape to the host: they are
//! reported on stderr and swallowed (see `core::formatter`).

use thiserror::Error;

/// Result type alias for reqtable operations
pub type Result<T> = std::result::Result<T, ReqtableError>;

/// Main error type for reqtable
#[derive(Error, Debug)]
pub enum ReqtableError {
    #[error("Formatting failed: {0}")]
    FormattingFailure(String),

    #[error("Token unavailable: {0}")]
    TokenUnavailable(&'static str),

    #[error("Render failed: {0}")]
    RenderFailure(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ReqtableError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error happened while producing a log line
    ///
    /// These are the errors the formatter swallows; everything else
    /// belongs to setup (configuration, CLI) and is propagated.
    pub fn is_formatting(&self) -> bool {
        matches!(
            self,
            ReqtableError::FormattingFailure(_)
                | ReqtableError::TokenUnavailable(_)
                | ReqtableError::RenderFailure(_)
        )
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            ReqtableError::ConfigError(_) | ReqtableError::TomlError(_)
        )
    }
}
