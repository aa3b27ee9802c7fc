//! Attribute sanitation: forbidden names and blank values.

use crate::config::CleanConfig;
use crate::markup::Element;
use crate::utils::is_blank;

/// Remove forbidden attributes from every element under `root`.
///
/// Returns the number of attributes removed.
pub fn remove_forbidden_attributes(root: &mut Element, config: &CleanConfig) -> usize {
    let mut removed = 0;
    root.walk_mut(&mut |element| {
        removed += element
            .attrs
            .retain(|attr| !config.is_forbidden_attribute(&attr.name));
    });
    removed
}

/// Remove attributes whose value is empty or whitespace from every element
/// under `root`.
///
/// Returns the number of attributes removed.
pub fn remove_empty_attributes(root: &mut Element) -> usize {
    let mut removed = 0;
    root.walk_mut(&mut |element| {
        removed += element.attrs.retain(|attr| !is_blank(&attr.value));
    });
    removed
}
