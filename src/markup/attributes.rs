//! Ordered, case-insensitive attribute storage.

use crate::utils::names_equal;

/// A single `name="value"` pair. The name keeps its original case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Element attributes in document order.
///
/// Lookups compare names case-insensitively; output keeps the case the
/// attribute was first written with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    items: Vec<Attribute>,
}

impl Attributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|attr| names_equal(&attr.name, name))
    }

    /// Value of the attribute called `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|idx| self.items[idx].value.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Attribute at `index` in document order.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Attribute> {
        self.items.get(index)
    }

    /// Set `name` to `value`.
    ///
    /// An existing attribute keeps its position and spelling; a new one is
    /// appended.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(idx) => self.items[idx].value = value,
            None => self.items.push(Attribute { name, value }),
        }
    }

    /// Remove the attribute called `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|idx| self.items.remove(idx).value)
    }

    /// Remove the attribute at `index`, returning it.
    pub fn remove_at(&mut self, index: usize) -> Option<Attribute> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Keep only the attributes for which `keep` returns true.
    ///
    /// Returns how many were removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&Attribute) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(|attr| keep(attr));
        before - self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.items.iter()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        let attrs: Attributes = [("Style", "color:red")].into_iter().collect();
        assert_eq!(attrs.get("style"), Some("color:red"));
        assert_eq!(attrs.get("STYLE"), Some("color:red"));
        assert!(attrs.get("class").is_none());
    }

    #[test]
    fn test_set_keeps_position_and_spelling() {
        let mut attrs: Attributes = [("class", "a"), ("Style", "x"), ("id", "b")]
            .into_iter()
            .collect();
        attrs.set("style", "y");

        let names: Vec<&str> = attrs.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["class", "Style", "id"]);
        assert_eq!(attrs.get("style"), Some("y"));
    }

    #[test]
    fn test_remove_by_name_and_index() {
        let mut attrs: Attributes = [("lang", "en"), ("style", "x")].into_iter().collect();
        assert_eq!(attrs.remove("LANG"), Some("en".to_string()));
        assert_eq!(attrs.remove("lang"), None);
        assert_eq!(attrs.remove_at(0).map(|a| a.name), Some("style".to_string()));
        assert!(attrs.remove_at(0).is_none());
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_retain_reports_removed_count() {
        let mut attrs: Attributes = [("a", ""), ("b", "1"), ("c", " ")].into_iter().collect();
        let removed = attrs.retain(|attr| !attr.value.trim().is_empty());
        assert_eq!(removed, 2);
        assert_eq!(attrs.len(), 1);
    }
}
