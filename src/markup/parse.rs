//! HTML text to owned tree.
//!
//! Parsing is delegated to `scraper` (html5ever underneath), which accepts
//! any markup and never fails. The resulting `ego_tree` arena is walked once
//! and copied into the owned [`Document`] the rewrite passes mutate.

use ego_tree::NodeRef;
use scraper::Html;

use super::node::{Document, Element, Node};
use crate::error::{CleanError, CleanResult};
use crate::utils::MAX_NESTING_DEPTH;

/// Parse an HTML fragment into an owned document.
///
/// Doctypes and processing instructions are dropped; elements, text and
/// comments are kept in document order.
///
/// # Errors
///
/// Returns `CleanError::NestingTooDeep` when elements nest deeper than
/// [`MAX_NESTING_DEPTH`]. The tree is never truncated.
pub fn parse_fragment(html: &str) -> CleanResult<Document> {
    let fragment = Html::parse_fragment(html);

    // The fragment parser wraps content in a synthetic <html> element
    let root = fragment.root_element();
    let children = convert_children(*root, 0)?;

    Ok(Document::new(children))
}

fn convert_children(parent: NodeRef<'_, scraper::Node>, depth: usize) -> CleanResult<Vec<Node>> {
    let mut children = Vec::new();
    for child in parent.children() {
        if let Some(node) = convert_node(child, depth)? {
            children.push(node);
        }
    }
    Ok(children)
}

fn convert_node(node: NodeRef<'_, scraper::Node>, depth: usize) -> CleanResult<Option<Node>> {
    let converted = match node.value() {
        scraper::Node::Text(text) => Some(Node::Text(String::from(&**text))),
        scraper::Node::Comment(comment) => Some(Node::Comment(String::from(&**comment))),
        scraper::Node::Element(source) => {
            let mut element = Element::new(source.name());
            for (name, value) in source.attrs() {
                element.attrs.set(name, value);
            }

            if node.has_children() {
                if depth >= MAX_NESTING_DEPTH {
                    tracing::warn!(
                        limit = MAX_NESTING_DEPTH,
                        element = source.name(),
                        "Maximum HTML nesting depth exceeded, rejecting input"
                    );
                    return Err(CleanError::NestingTooDeep {
                        limit: MAX_NESTING_DEPTH,
                    });
                }
                element.children = convert_children(node, depth + 1)?;
            }

            Some(Node::Element(element))
        }
        _ => None,
    };
    Ok(converted)
}

/// Parse markup that is known to stay within the nesting limit.
#[cfg(test)]
pub(crate) fn fragment(html: &str) -> Document {
    parse_fragment(html).expect("test markup stays within the nesting limit")
}
