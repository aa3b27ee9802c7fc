//! Default style stripping.
//!
//! Works on the raw `style` text: a declaration is dropped when its key is
//! in the default table and its untrimmed value equals the trimmed default,
//! ignoring case. The attribute is only rewritten when something was
//! dropped.

use crate::cleaner::signatures::StyleSignature;
use crate::markup::Element;
use crate::utils::{STYLE_ATTR, is_blank, names_equal};

/// Strip default declarations from every element under `root`.
///
/// Returns the number of elements whose style changed.
pub fn strip_default_styles(root: &mut Element, defaults: &StyleSignature) -> usize {
    let mut changed = 0;
    root.walk_mut(&mut |element| {
        if strip_element(element, defaults) {
            changed += 1;
        }
    });
    changed
}

fn strip_element(element: &mut Element, defaults: &StyleSignature) -> bool {
    let Some(style) = element.attrs.get(STYLE_ATTR) else {
        return false;
    };
    if is_blank(style) {
        return false;
    }

    let segments: Vec<&str> = style.split(';').collect();
    let kept: Vec<&str> = segments
        .iter()
        .copied()
        .filter(|segment| !is_default_declaration(segment, defaults))
        .collect();

    if kept.len() == segments.len() {
        return false;
    }

    let stripped = kept.join(";");
    element.attrs.set(STYLE_ATTR, stripped);
    true
}

fn is_default_declaration(segment: &str, defaults: &StyleSignature) -> bool {
    let Some((key, value)) = segment.split_once(':') else {
        return false;
    };
    defaults
        .value_of(key)
        .is_some_and(|default| names_equal(value, default.trim()))
}
