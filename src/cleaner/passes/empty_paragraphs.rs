//! Empty paragraph removal.

use crate::markup::{Element, Node};
use crate::utils::{NBSP_ENTITY, PARAGRAPH_TAG, is_blank};

/// Remove paragraphs without visible content from `parent` and all of its
/// descendants.
///
/// Returns the number of paragraphs removed.
pub fn remove_empty_paragraphs(parent: &mut Element) -> usize {
    let before = parent.children.len();
    parent.children.retain(|child| !is_empty_paragraph(child));
    let mut removed = before - parent.children.len();

    for child in &mut parent.children {
        if let Node::Element(element) = child {
            removed += remove_empty_paragraphs(element);
        }
    }

    removed
}

/// A paragraph whose markup is blank once `&nbsp;` padding is removed.
#[must_use]
pub fn is_empty_paragraph(node: &Node) -> bool {
    node.as_element()
        .filter(|element| element.is_tag(PARAGRAPH_TAG))
        .is_some_and(|paragraph| is_blank(&paragraph.inner_html().replace(NBSP_ENTITY, "")))
}
