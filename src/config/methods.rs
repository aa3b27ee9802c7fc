//! Loading and saving `CleanConfig` as JSON

use std::path::Path;

use super::types::CleanConfig;
use crate::error::CleanResult;

impl CleanConfig {
    /// Parse a configuration from JSON text and validate it.
    ///
    /// Fields left out keep their default values.
    ///
    /// # Errors
    ///
    /// Returns `CleanError::Json` for malformed JSON and
    /// `CleanError::InvalidConfig` when validation fails.
    pub fn from_json_str(json: &str) -> CleanResult<Self> {
        let config: CleanConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `CleanError::Io` when the file cannot be read, otherwise the
    /// same errors as [`CleanConfig::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> CleanResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading cleaner configuration");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Pretty-printed JSON form of this configuration.
    ///
    /// # Errors
    ///
    /// Returns `CleanError::Json` if serialization fails.
    pub fn to_json_pretty(&self) -> CleanResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
