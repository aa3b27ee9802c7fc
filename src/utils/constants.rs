//! Shared constants for notecleaner
//!
//! This module contains default values and markup tables used throughout
//! the codebase to ensure consistency and avoid magic numbers.

/// Maximum HTML input size: 10 MB
///
/// Editor exports of even very long notes stay well below 1 MB.
/// Anything larger is rejected before parsing.
pub const MAX_HTML_SIZE: usize = 10 * 1024 * 1024;

/// Maximum nesting depth kept when building the owned tree
///
/// Every rewrite pass recurses over the tree, so nesting is capped to keep
/// stack usage bounded. Deeper content is truncated with a warning.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Entity form of the non-breaking space marker the editor pads paragraphs with
pub const NBSP_ENTITY: &str = "&nbsp;";

/// Tag name given to the synthetic document root
pub const DOCUMENT_ROOT_TAG: &str = "#document";

/// Elements serialized without an end tag
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements whose text content is serialized without escaping
pub const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext",
];

/// Tag names used by the rewrite passes
pub const PARAGRAPH_TAG: &str = "p";
pub const SPAN_TAG: &str = "span";
pub const STYLE_ATTR: &str = "style";
