//! Getter methods for `CleanConfig`

use super::types::CleanConfig;
use crate::cleaner::signatures::{HeadingSignatures, StyleSignature};
use crate::markup::Element;

impl CleanConfig {
    #[must_use]
    pub fn wrapper_tags(&self) -> &[String] {
        &self.wrapper_tags
    }

    #[must_use]
    pub fn default_styles(&self) -> &StyleSignature {
        &self.default_styles
    }

    #[must_use]
    pub fn forbidden_attributes(&self) -> &[String] {
        &self.forbidden_attributes
    }

    #[must_use]
    pub fn headings(&self) -> &HeadingSignatures {
        &self.headings
    }

    #[must_use]
    pub fn max_input_bytes(&self) -> usize {
        self.max_input_bytes
    }

    /// Whether `element` is one of the configured wrapper tags.
    #[must_use]
    pub fn is_wrapper(&self, element: &Element) -> bool {
        self.wrapper_tags.iter().any(|tag| element.is_tag(tag))
    }

    /// Whether `name` is a forbidden attribute (case-insensitive).
    #[must_use]
    pub fn is_forbidden_attribute(&self, name: &str) -> bool {
        self.forbidden_attributes
            .iter()
            .any(|forbidden| forbidden.eq_ignore_ascii_case(name))
    }
}
