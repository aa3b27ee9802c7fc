//! Owned tree to HTML text.
//!
//! Escaping goes through `html-escape`; decoded non-breaking spaces are
//! written back as `&nbsp;` so the output keeps the editor's padding
//! markers visible.

use super::node::{Element, Node};
use crate::utils::{NBSP_ENTITY, RAW_TEXT_ELEMENTS, VOID_ELEMENTS};

fn push_with_nbsp(output: &mut String, escaped: &str) {
    if escaped.contains('\u{a0}') {
        output.push_str(&escaped.replace('\u{a0}', NBSP_ENTITY));
    } else {
        output.push_str(escaped);
    }
}

pub(crate) fn write_node(node: &Node, raw_text: bool, output: &mut String) {
    match node {
        Node::Text(text) => {
            if raw_text {
                output.push_str(text);
            } else {
                push_with_nbsp(output, &html_escape::encode_text(text));
            }
        }
        Node::Comment(comment) => {
            output.push_str("<!--");
            output.push_str(comment);
            output.push_str("-->");
        }
        Node::Element(element) => write_element(element, output),
    }
}

pub(crate) fn write_element(element: &Element, output: &mut String) {
    let name = element.name();
    output.push('<');
    output.push_str(name);

    for attr in element.attrs.iter() {
        output.push(' ');
        output.push_str(&attr.name);
        output.push_str("=\"");
        push_with_nbsp(
            output,
            &html_escape::encode_double_quoted_attribute(&attr.value),
        );
        output.push('"');
    }
    output.push('>');

    if VOID_ELEMENTS.iter().any(|void| element.is_tag(void)) {
        return;
    }

    write_children(element, output);

    output.push_str("</");
    output.push_str(name);
    output.push('>');
}

pub(crate) fn write_children(element: &Element, output: &mut String) {
    let raw_text = RAW_TEXT_ELEMENTS.iter().any(|raw| element.is_tag(raw));
    for child in &element.children {
        write_node(child, raw_text, output);
    }
}
