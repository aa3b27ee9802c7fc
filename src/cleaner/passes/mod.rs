//! Tree rewrite passes.
//!
//! Each pass mutates the owned tree in place, never fails, and returns how
//! many nodes it changed. Nodes that do not meet a pass's preconditions are
//! left untouched.

pub mod attributes;
pub mod default_styles;
pub mod empty_paragraphs;
pub mod formatting;
pub mod headings;
pub mod meaningless_spans;
pub mod overlapping_spans;
pub mod wrapper_flattening;

pub use attributes::{remove_empty_attributes, remove_forbidden_attributes};
pub use default_styles::strip_default_styles;
pub use empty_paragraphs::remove_empty_paragraphs;
pub use formatting::convert_formatting;
pub use headings::promote_headings;
pub use meaningless_spans::remove_meaningless_spans;
pub use overlapping_spans::collapse_overlapping_spans;
pub use wrapper_flattening::flatten_wrappers;
