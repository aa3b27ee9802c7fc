//! Heading promotion.
//!
//! A paragraph whose only attribute is a `style` exactly matching a heading
//! signature is renamed to that heading and loses the attribute.

use crate::cleaner::signatures::HeadingSignatures;
use crate::cleaner::style::StyleMap;
use crate::markup::{Element, Node};
use crate::utils::{PARAGRAPH_TAG, STYLE_ATTR, names_equal};

/// Promote paragraphs across the whole tree.
///
/// [`promote_with_children`] only looks one level down, so it is applied at
/// every element of a pre-order walk. Returns the number of paragraphs
/// promoted.
pub fn promote_headings(root: &mut Element, headings: &HeadingSignatures) -> usize {
    let mut promoted = 0;
    root.walk_mut(&mut |element| {
        promoted += promote_with_children(element, headings);
    });
    promoted
}

/// Check `node` itself and each of its direct children.
pub fn promote_with_children(node: &mut Element, headings: &HeadingSignatures) -> usize {
    let mut promoted = usize::from(promote_paragraph(node, headings));
    for child in &mut node.children {
        if let Node::Element(element) = child {
            promoted += usize::from(promote_paragraph(element, headings));
        }
    }
    promoted
}

/// Promote a single paragraph if its style matches a heading signature.
pub fn promote_paragraph(paragraph: &mut Element, headings: &HeadingSignatures) -> bool {
    if !paragraph.is_tag(PARAGRAPH_TAG) || paragraph.attrs.len() != 1 {
        return false;
    }

    let Some(attr) = paragraph.attrs.at(0) else {
        return false;
    };
    if !names_equal(&attr.name, STYLE_ATTR) {
        return false;
    }

    let Some(level) = headings.resolve(&StyleMap::parse(&attr.value)) else {
        return false;
    };

    paragraph.set_name(level.tag());
    paragraph.attrs.remove_at(0);
    true
}
