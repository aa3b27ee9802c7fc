//! Meaningless span removal.
//!
//! Spans without attributes are replaced by their children. Children are
//! scanned from the end; spliced-in content is examined again at the same
//! level, so directly nested bare spans disappear in one run. That is the
//! result the parent-then-children recursion is meant to reach.

use crate::markup::{Element, Node};
use crate::utils::SPAN_TAG;

/// Unwrap bare spans under `parent` and all of its descendants.
///
/// Returns the number of spans removed.
pub fn remove_meaningless_spans(parent: &mut Element) -> usize {
    let mut removed = 0;
    let mut idx = parent.children.len();

    while idx > 0 {
        idx -= 1;
        if !is_meaningless_span(&parent.children[idx]) {
            continue;
        }
        let Node::Element(span) = parent.children.remove(idx) else {
            continue;
        };
        let spliced = span.children.len();
        parent.children.splice(idx..idx, span.children);
        idx += spliced;
        removed += 1;
    }

    for child in &mut parent.children {
        if let Node::Element(element) = child {
            removed += remove_meaningless_spans(element);
        }
    }

    removed
}

#[must_use]
pub fn is_meaningless_span(node: &Node) -> bool {
    node.as_element()
        .is_some_and(|element| element.is_tag(SPAN_TAG) && element.attrs.is_empty())
}
