//! Wrapper flattening.
//!
//! Layout-only containers directly under a parent are replaced by their
//! children. One scan lifts one nesting level, so scans repeat until a scan
//! removes nothing. Wrappers nested inside other elements are left alone.

use crate::markup::{Element, Node};

/// Flatten wrappers under `parent` until none remain as direct children.
///
/// Returns the total number of wrappers removed.
pub fn flatten_wrappers<F>(parent: &mut Element, is_wrapper: F) -> usize
where
    F: Fn(&Element) -> bool,
{
    let mut total = 0;
    loop {
        let removed = flatten_once(parent, &is_wrapper);
        if removed == 0 {
            return total;
        }
        total += removed;
    }
}

/// Single scan over the direct children of `parent`.
fn flatten_once<F>(parent: &mut Element, is_wrapper: &F) -> usize
where
    F: Fn(&Element) -> bool,
{
    let children = parent.take_children();
    let mut removed = 0;

    for child in children {
        match child {
            Node::Element(element) if is_wrapper(&element) => {
                removed += 1;
                parent.children.extend(element.children);
            }
            other => parent.children.push(other),
        }
    }

    removed
}
