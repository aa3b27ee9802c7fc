//! Error types for note cleaning
//!
//! The rewrite passes themselves never fail; errors only come from input
//! validation and from loading configuration. A conversion either returns
//! fully processed output or one of these errors, never partial output.

use thiserror::Error;

/// Result type alias for cleaner operations
pub type CleanResult<T> = Result<T, CleanError>;

/// Error types for cleaner operations
#[derive(Debug, Error)]
pub enum CleanError {
    /// Input exceeded the configured size limit
    #[error("HTML input too large: {size} bytes (limit {limit} bytes)")]
    InputTooLarge { size: usize, limit: usize },

    /// Elements nested deeper than the tree can hold
    #[error("HTML nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    /// Configuration failed validation
    #[error("Invalid cleaner configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be decoded
    #[error("Configuration JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CleanError {
    /// Check if the error was caused by the configuration rather than the input
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CleanError::InvalidConfig(_) | CleanError::Io(_) | CleanError::Json(_)
        )
    }
}
