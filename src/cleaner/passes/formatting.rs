//! Style-to-element formatting conversion.
//!
//! Bold, italic and underline declarations on spans and paragraphs become
//! `<b>`, `<i>` and `<u>` wrappers around the element's content. Each match
//! wraps the content produced by the previous one, so the first trigger
//! ends up innermost.

use crate::cleaner::signatures::FORMATTING_TRIGGERS;
use crate::cleaner::style::StyleMap;
use crate::markup::Element;
use crate::utils::{PARAGRAPH_TAG, SPAN_TAG, STYLE_ATTR};

/// Convert formatting styles on every span and paragraph under `root`.
///
/// Returns the number of elements converted.
pub fn convert_formatting(root: &mut Element) -> usize {
    let mut converted = 0;
    root.walk_mut(&mut |element| {
        if convert_element(element) {
            converted += 1;
        }
    });
    converted
}

/// Convert a single element. Untouched unless at least one trigger matches.
pub fn convert_element(element: &mut Element) -> bool {
    if !element.is_any_tag(&[SPAN_TAG, PARAGRAPH_TAG]) {
        return false;
    }

    let mut style = StyleMap::parse(element.attrs.get(STYLE_ATTR).unwrap_or_default());
    if style.is_empty() {
        return false;
    }

    let mut wrapped = false;
    for trigger in FORMATTING_TRIGGERS {
        if trigger.matches(&style) {
            wrap_content(element, trigger.tag);
            style.remove(trigger.property);
            wrapped = true;
        }
    }

    if !wrapped {
        return false;
    }

    let composed = style.compose();
    if composed.is_empty() {
        element.attrs.remove(STYLE_ATTR);
    } else {
        element.attrs.set(STYLE_ATTR, composed);
    }
    true
}

fn wrap_content(element: &mut Element, tag: &str) {
    let mut wrapper = Element::new(tag);
    wrapper.children = element.take_children();
    element.children.push(wrapper.into());
}
