//! Owned document tree.
//!
//! Every child is owned by exactly one parent through a plain `Vec<Node>`,
//! so moving a subtree is a `Vec` move and can never leave two owners.

use super::attributes::Attributes;
use super::serialize;
use crate::utils::{DOCUMENT_ROOT_TAG, names_equal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

impl Node {
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// True when this node is an element with the given tag name.
    #[must_use]
    pub fn is_tag(&self, tag: &str) -> bool {
        self.as_element().is_some_and(|element| element.is_tag(tag))
    }

    /// Serialized markup of this node.
    #[must_use]
    pub fn outer_html(&self) -> String {
        let mut output = String::new();
        serialize::write_node(self, false, &mut output);
        output
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    pub attrs: Attributes,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Attributes::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(name, value);
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::Text(text.into()))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn is_tag(&self, tag: &str) -> bool {
        names_equal(&self.name, tag)
    }

    #[must_use]
    pub fn is_any_tag(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.is_tag(tag))
    }

    /// Take all children out, leaving this element empty.
    pub fn take_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }

    /// Serialized markup of the children.
    #[must_use]
    pub fn inner_html(&self) -> String {
        let mut output = String::new();
        serialize::write_children(self, &mut output);
        output
    }

    /// Serialized markup of this element including its own tags.
    #[must_use]
    pub fn outer_html(&self) -> String {
        let mut output = String::new();
        serialize::write_element(self, &mut output);
        output
    }

    /// Visit this element and then every descendant element, pre-order.
    ///
    /// Children are read after `visit` returns, so a visitor that rewrites
    /// an element's children is followed into the new children.
    pub fn walk_mut<F>(&mut self, visit: &mut F)
    where
        F: FnMut(&mut Element),
    {
        visit(self);
        for child in &mut self.children {
            if let Node::Element(element) = child {
                element.walk_mut(visit);
            }
        }
    }

    /// Immutable pre-order walk over this element and its descendants.
    pub fn walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&Element),
    {
        visit(self);
        for child in &self.children {
            if let Node::Element(element) = child {
                element.walk(visit);
            }
        }
    }
}

/// A parsed document: one synthetic root element holding the fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    #[must_use]
    pub fn new(children: Vec<Node>) -> Self {
        let mut root = Element::new(DOCUMENT_ROOT_TAG);
        root.children = children;
        Self { root }
    }

    /// Markup of the whole document. The synthetic root emits no tags of
    /// its own.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.root.inner_html()
    }
}
