//! Overlapping span collapse.
//!
//! `<p><span style="...">content</span></p>` becomes a single paragraph
//! carrying the merged style. The span's declarations win on collision.

use crate::cleaner::style::StyleMap;
use crate::markup::{Element, Node};
use crate::utils::{PARAGRAPH_TAG, SPAN_TAG, STYLE_ATTR, names_equal};

/// Collapse every qualifying paragraph under `root`.
///
/// Returns the number of paragraphs collapsed.
pub fn collapse_overlapping_spans(root: &mut Element) -> usize {
    let mut collapsed = 0;
    root.walk_mut(&mut |element| {
        if collapse_paragraph(element) {
            collapsed += 1;
        }
    });
    collapsed
}

/// Collapse `paragraph` if its only child is a span whose only attribute is
/// `style`.
pub fn collapse_paragraph(paragraph: &mut Element) -> bool {
    let Some(span_style) = sole_styled_span(paragraph) else {
        return false;
    };

    let mut style = StyleMap::parse(paragraph.attrs.get(STYLE_ATTR).unwrap_or_default());
    style.merge_from(&span_style);

    let Some(Node::Element(span)) = paragraph.children.pop() else {
        return false;
    };
    paragraph.children = span.children;

    let composed = style.compose();
    if composed.is_empty() {
        paragraph.attrs.remove(STYLE_ATTR);
    } else {
        paragraph.attrs.set(STYLE_ATTR, composed);
    }
    true
}

fn sole_styled_span(paragraph: &Element) -> Option<StyleMap> {
    if !paragraph.is_tag(PARAGRAPH_TAG) || paragraph.children.len() != 1 {
        return None;
    }

    let span = paragraph.children[0].as_element()?;
    if !span.is_tag(SPAN_TAG) || span.attrs.len() != 1 {
        return None;
    }

    let attr = span.attrs.at(0)?;
    names_equal(&attr.name, STYLE_ATTR).then(|| StyleMap::parse(&attr.value))
}
