//! HTML tree collaborator.
//!
//! The cleaner only needs a tolerant parser, an owned mutable tree and a
//! serializer. [`TreeProvider`] is the seam; [`ScraperTreeProvider`] is the
//! html5ever-backed implementation used by default.

pub mod attributes;
pub mod node;
pub mod parse;
pub mod serialize;

pub use attributes::{Attribute, Attributes};
pub use node::{Document, Element, Node};
pub use parse::parse_fragment;

use crate::error::CleanResult;

/// Source of parsed documents and their serialization.
pub trait TreeProvider {
    /// Parse `html` into a document.
    ///
    /// Malformed markup must be recovered from, never rejected. The only
    /// failure is a document the provider cannot represent whole, such as
    /// nesting past [`crate::utils::MAX_NESTING_DEPTH`].
    ///
    /// # Errors
    ///
    /// Returns an error instead of a partial tree.
    fn parse(&self, html: &str) -> CleanResult<Document>;

    /// Serialize the document root's content back to markup.
    fn serialize(&self, document: &Document) -> String {
        document.to_html()
    }
}

/// Default provider parsing through `scraper` / html5ever.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScraperTreeProvider;

impl TreeProvider for ScraperTreeProvider {
    fn parse(&self, html: &str) -> CleanResult<Document> {
        parse_fragment(html)
    }
}
