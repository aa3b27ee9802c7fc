pub mod constants;

pub use constants::*;

/// Case-insensitive ASCII comparison used for tag, attribute and style names.
#[inline]
pub fn names_equal(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Whether a string is empty or consists only of whitespace.
///
/// `char::is_whitespace` covers U+00A0, so a run of decoded non-breaking
/// spaces counts as blank too.
#[inline]
pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}
