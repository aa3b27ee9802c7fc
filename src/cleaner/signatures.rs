//! Named style signatures: default styles, heading styles and formatting
//! triggers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::style::StyleMap;
use crate::utils::names_equal;

/// Fixed case-insensitive `property -> value` set.
///
/// Serialized as a JSON object, e.g. `{"color": "#1E4E79"}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct StyleSignature {
    entries: Vec<(String, String)>,
}

impl StyleSignature {
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut signature = StyleSignature::default();
        for (key, value) in entries {
            let key = key.into();
            let value = value.into();
            match signature.entries.iter_mut().find(|(k, _)| names_equal(k, &key)) {
                Some(entry) => entry.1 = value,
                None => signature.entries.push((key, value)),
            }
        }
        signature
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value stored for `key`, looked up case-insensitively without trimming.
    #[must_use]
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| names_equal(k, key))
            .map(|(_, v)| v.as_str())
    }

    /// Whether `style` holds exactly this signature: same number of
    /// declarations, and each declaration present here with an equal
    /// (trimmed, case-insensitive) value.
    #[must_use]
    pub fn matches_exactly(&self, style: &StyleMap) -> bool {
        if style.len() != self.len() {
            return false;
        }
        style.iter().all(|(key, value)| {
            self.value_of(key).is_some_and(|expected| {
                names_equal(expected.trim(), value.map(str::trim).unwrap_or_default())
            })
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Declaration order does not matter for equality.
impl PartialEq for StyleSignature {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.value_of(key) == Some(value))
    }
}

impl Eq for StyleSignature {}

impl From<BTreeMap<String, String>> for StyleSignature {
    fn from(map: BTreeMap<String, String>) -> Self {
        StyleSignature::new(map)
    }
}

impl From<StyleSignature> for BTreeMap<String, String> {
    fn from(signature: StyleSignature) -> Self {
        signature.entries.into_iter().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Order in which signatures are tried. Signatures are meant to be
    /// disjoint, but the order stays fixed so overlaps resolve the same way
    /// every time.
    pub const MATCH_ORDER: [HeadingLevel; 6] = [
        HeadingLevel::H6,
        HeadingLevel::H5,
        HeadingLevel::H4,
        HeadingLevel::H3,
        HeadingLevel::H2,
        HeadingLevel::H1,
    ];

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

/// The six heading signatures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingSignatures {
    pub h1: StyleSignature,
    pub h2: StyleSignature,
    pub h3: StyleSignature,
    pub h4: StyleSignature,
    pub h5: StyleSignature,
    pub h6: StyleSignature,
}

impl Default for HeadingSignatures {
    fn default() -> Self {
        Self {
            h1: StyleSignature::new([("font-size", "16.0pt"), ("color", "#1E4E79")]),
            h2: StyleSignature::new([("font-size", "14.0pt"), ("color", "#2E75B5")]),
            h3: StyleSignature::new([("font-size", "12.0pt"), ("color", "#5B9BD5")]),
            h4: StyleSignature::new([
                ("font-size", "12.0pt"),
                ("color", "#5B9BD5"),
                ("font-style", "italic"),
            ]),
            h5: StyleSignature::new([("color", "#2E75B5")]),
            h6: StyleSignature::new([("color", "#2E75B5"), ("font-style", "italic")]),
        }
    }
}

impl HeadingSignatures {
    #[must_use]
    pub fn get(&self, level: HeadingLevel) -> &StyleSignature {
        match level {
            HeadingLevel::H1 => &self.h1,
            HeadingLevel::H2 => &self.h2,
            HeadingLevel::H3 => &self.h3,
            HeadingLevel::H4 => &self.h4,
            HeadingLevel::H5 => &self.h5,
            HeadingLevel::H6 => &self.h6,
        }
    }

    /// First heading level (in [`HeadingLevel::MATCH_ORDER`]) whose signature
    /// `style` matches exactly.
    #[must_use]
    pub fn resolve(&self, style: &StyleMap) -> Option<HeadingLevel> {
        HeadingLevel::MATCH_ORDER
            .into_iter()
            .find(|level| self.get(*level).matches_exactly(style))
    }
}

/// Style declaration that turns into an inline formatting element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingTrigger {
    pub property: &'static str,
    pub value: &'static str,
    pub tag: &'static str,
}

/// Checked in this order; the first match ends up innermost.
pub const FORMATTING_TRIGGERS: [FormattingTrigger; 3] = [
    FormattingTrigger {
        property: "font-weight",
        value: "bold",
        tag: "b",
    },
    FormattingTrigger {
        property: "font-style",
        value: "italic",
        tag: "i",
    },
    FormattingTrigger {
        property: "text-decoration",
        value: "underline",
        tag: "u",
    },
];

impl FormattingTrigger {
    #[must_use]
    pub fn matches(&self, style: &StyleMap) -> bool {
        names_equal(style.trimmed_value(self.property), self.value)
    }
}
