//! Core configuration types for note cleaning
//!
//! This module contains the `CleanConfig` struct: the style tables and
//! name sets the rewrite passes compare against.

use serde::{Deserialize, Serialize};

use crate::cleaner::signatures::{HeadingSignatures, StyleSignature};
use crate::error::{CleanError, CleanResult};
use crate::utils::MAX_HTML_SIZE;

/// Configuration for the cleaning pipeline
///
/// Fixed once a cleaner is constructed. Missing fields in a JSON file fall
/// back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Tags treated as layout-only wrappers at the document root.
    ///
    /// Default: `["div"]`
    pub(crate) wrapper_tags: Vec<String>,

    /// Declarations considered editor boilerplate and stripped wherever they
    /// appear verbatim.
    ///
    /// Default: `margin:0in`, `font-family:Calibri`, `font-size:11.0pt`
    pub(crate) default_styles: StyleSignature,

    /// Attribute names removed from every element.
    ///
    /// Default: `["lang"]`
    pub(crate) forbidden_attributes: Vec<String>,

    /// Exact style sets that mark a paragraph as a heading.
    pub(crate) headings: HeadingSignatures,

    /// Inputs larger than this many bytes are rejected before parsing.
    ///
    /// Default: 10 MB
    pub(crate) max_input_bytes: usize,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            wrapper_tags: vec!["div".to_string()],
            default_styles: StyleSignature::new([
                ("margin", "0in"),
                ("font-family", "Calibri"),
                ("font-size", "11.0pt"),
            ]),
            forbidden_attributes: vec!["lang".to_string()],
            headings: HeadingSignatures::default(),
            max_input_bytes: MAX_HTML_SIZE,
        }
    }
}

impl CleanConfig {
    /// Check the configuration for values the passes cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `CleanError::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> CleanResult<()> {
        if self.wrapper_tags.iter().any(|tag| tag.trim().is_empty()) {
            return Err(CleanError::InvalidConfig(
                "wrapper_tags must not contain blank tag names".to_string(),
            ));
        }

        if self
            .forbidden_attributes
            .iter()
            .any(|name| name.trim().is_empty())
        {
            return Err(CleanError::InvalidConfig(
                "forbidden_attributes must not contain blank names".to_string(),
            ));
        }

        for level in crate::cleaner::signatures::HeadingLevel::MATCH_ORDER {
            if self.headings.get(level).is_empty() {
                return Err(CleanError::InvalidConfig(format!(
                    "heading signature {} must declare at least one property",
                    level.tag()
                )));
            }
        }

        if self.max_input_bytes == 0 {
            return Err(CleanError::InvalidConfig(
                "max_input_bytes must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
