//! Fluent builder for `CleanConfig`
//!
//! Starts from the default editor tables; every setter replaces one table.
//! `build()` validates the result.

use super::types::CleanConfig;
use crate::cleaner::signatures::{HeadingLevel, StyleSignature};
use crate::error::CleanResult;

#[derive(Debug, Clone, Default)]
pub struct CleanConfigBuilder {
    config: CleanConfig,
}

impl CleanConfig {
    /// Start building a configuration from the defaults.
    #[must_use]
    pub fn builder() -> CleanConfigBuilder {
        CleanConfigBuilder::default()
    }
}

impl CleanConfigBuilder {
    /// Replace the set of wrapper tags flattened at the document root
    #[must_use]
    pub fn wrapper_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.wrapper_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the default-style table
    ///
    /// # Example
    /// ```rust
    /// # use notecleaner::config::CleanConfig;
    /// let config = CleanConfig::builder()
    ///     .default_styles([("margin", "0pt"), ("font-family", "Aptos")])
    ///     .build()?;
    /// assert_eq!(config.default_styles().value_of("margin"), Some("0pt"));
    /// # Ok::<(), notecleaner::CleanError>(())
    /// ```
    #[must_use]
    pub fn default_styles<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.config.default_styles = StyleSignature::new(entries);
        self
    }

    /// Replace the forbidden attribute names
    #[must_use]
    pub fn forbidden_attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.forbidden_attributes = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the signature for one heading level
    #[must_use]
    pub fn heading<K, V>(
        mut self,
        level: HeadingLevel,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let signature = StyleSignature::new(entries);
        let headings = &mut self.config.headings;
        match level {
            HeadingLevel::H1 => headings.h1 = signature,
            HeadingLevel::H2 => headings.h2 = signature,
            HeadingLevel::H3 => headings.h3 = signature,
            HeadingLevel::H4 => headings.h4 = signature,
            HeadingLevel::H5 => headings.h5 = signature,
            HeadingLevel::H6 => headings.h6 = signature,
        }
        self
    }

    #[must_use]
    pub fn max_input_bytes(mut self, bytes: usize) -> Self {
        self.config.max_input_bytes = bytes;
        self
    }

    /// Validate and return the configuration
    ///
    /// # Errors
    ///
    /// Returns `CleanError::InvalidConfig` when a table is unusable.
    pub fn build(self) -> CleanResult<CleanConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
