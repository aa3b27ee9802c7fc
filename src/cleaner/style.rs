//! Inline `style` declaration codec.
//!
//! Only flat `key:value` declarations are understood. Keys are compared
//! case-insensitively; values are kept exactly as written and only trimmed
//! by callers that compare them.

use crate::utils::names_equal;

/// Parsed `style` attribute: declarations in insertion order.
///
/// A declaration written without `:` has no value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    declarations: Vec<(String, Option<String>)>,
}

impl StyleMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key:value;key:value` text.
    ///
    /// Keys are trimmed, values are not. A repeated key overwrites the
    /// earlier value. Blank input gives an empty map, but a blank segment
    /// inside non-blank input (`color:red;`) is kept as an empty key with no
    /// value, so it still counts towards [`StyleMap::len`].
    #[must_use]
    pub fn parse(style: &str) -> Self {
        let mut map = StyleMap::new();
        if style.trim().is_empty() {
            return map;
        }
        for segment in style.split(';') {
            match segment.split_once(':') {
                Some((key, value)) => map.insert(key.trim(), Some(value.to_string())),
                None => map.insert(segment.trim(), None),
            }
        }
        map
    }

    /// Join declarations back into `key:value;key:value`.
    ///
    /// Empty-key entries from blank segments are not written. A map with
    /// nothing left to write composes to an empty string; callers drop the
    /// attribute rather than write `style=""`.
    #[must_use]
    pub fn compose(&self) -> String {
        self.declarations
            .iter()
            .filter(|(key, _)| !key.is_empty())
            .map(|(key, value)| format!("{key}:{}", value.as_deref().unwrap_or_default()))
            .collect::<Vec<_>>()
            .join(";")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.declarations
            .iter()
            .position(|(existing, _)| names_equal(existing, key))
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Raw value for `key`. `Some(None)` means the key was written without a
    /// value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.position(key)
            .map(|idx| self.declarations[idx].1.as_deref())
    }

    /// Trimmed value for `key`; missing keys and missing values read as "".
    #[must_use]
    pub fn trimmed_value(&self, key: &str) -> &str {
        self.get(key).flatten().map(str::trim).unwrap_or_default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match self.position(&key) {
            Some(idx) => self.declarations[idx].1 = value,
            None => self.declarations.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(idx) => {
                self.declarations.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Copy every declaration of `other` into this map; `other` wins on
    /// key collisions.
    pub fn merge_from(&mut self, other: &StyleMap) {
        for (key, value) in &other.declarations {
            self.insert(key.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.declarations
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_compose() {
        let style = StyleMap::parse("color:red;font-size:16.0pt");
        assert_eq!(style.len(), 2);
        assert_eq!(style.get("COLOR"), Some(Some("red")));
        assert_eq!(style.compose(), "color:red;font-size:16.0pt");
    }

    #[test]
    fn test_keys_trimmed_values_raw() {
        let style = StyleMap::parse(" color : red ");
        assert_eq!(style.get("color"), Some(Some(" red ")));
        assert_eq!(style.trimmed_value("color"), "red");
    }

    #[test]
    fn test_splits_on_first_colon_only() {
        let style = StyleMap::parse("background:url(http://x/y.png)");
        assert_eq!(style.get("background"), Some(Some("url(http://x/y.png)")));
    }

    #[test]
    fn test_segment_without_colon_has_no_value() {
        let style = StyleMap::parse("bogus;color:red");
        assert_eq!(style.get("bogus"), Some(None));
        assert_eq!(style.trimmed_value("bogus"), "");
        assert_eq!(style.compose(), "bogus:;color:red");
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert!(StyleMap::parse("").is_empty());
        assert!(StyleMap::parse("   ").is_empty());
        assert_eq!(StyleMap::new().compose(), "");
    }

    #[test]
    fn test_blank_segment_kept_as_empty_key() {
        let style = StyleMap::parse("color:red;");
        assert_eq!(style.len(), 2);
        assert_eq!(style.get(""), Some(None));
        assert_eq!(style.compose(), "color:red");

        let style = StyleMap::parse("; ;");
        assert_eq!(style.len(), 1);
        assert_eq!(style.compose(), "");
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let style = StyleMap::parse("color:red;COLOR:blue");
        assert_eq!(style.len(), 1);
        assert_eq!(style.trimmed_value("color"), "blue");
    }

    #[test]
    fn test_merge_other_wins() {
        let mut paragraph = StyleMap::parse("color:red;margin:1in");
        paragraph.merge_from(&StyleMap::parse("color:blue;font-weight:bold"));
        assert_eq!(paragraph.compose(), "color:blue;margin:1in;font-weight:bold");
    }

    #[test]
    fn test_remove() {
        let mut style = StyleMap::parse("font-weight:bold;color:red");
        assert!(style.remove("FONT-WEIGHT"));
        assert!(!style.remove("font-weight"));
        assert_eq!(style.compose(), "color:red");
    }
}
