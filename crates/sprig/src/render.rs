// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serialization of node trees into HTML text.
//!
//! Output is a pure function of the tree. The compact form inserts no
//! whitespace at all; the pretty form puts each child on its own line,
//! indented two spaces per level, except that elements containing only
//! text stay on a single line.

use std::fmt::{self, Display};

use crate::dom::{Document, Element, Node};

/// Tags that serialize without children or a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link",
    "meta", "param", "source", "track", "wbr",
];

fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

fn escape_attribute(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}

fn open_tag(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(el.tag);
    for attr in &el.attributes {
        out.push(' ');
        out.push_str(attr.name());
        out.push_str("=\"");
        escape_attribute(attr.value(), out);
        out.push('"');
    }
    out.push('>');
}

fn close_tag(el: &Element, out: &mut String) {
    out.push_str("</");
    out.push_str(el.tag);
    out.push('>');
}

fn indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

pub(crate) fn compact(node: &Node, out: &mut String) {
    match node {
        Node::Element(el) => compact_element(el, out),
        Node::Text(text) => escape_text(text, out),
        Node::Fragment(nodes) => {
            for node in nodes {
                compact(node, out);
            }
        }
    }
}

pub(crate) fn compact_element(el: &Element, out: &mut String) {
    open_tag(el, out);
    if is_void(el.tag) {
        return;
    }
    for child in &el.children {
        compact(child, out);
    }
    close_tag(el, out);
}

pub(crate) fn pretty(node: &Node, depth: usize, out: &mut String) {
    match node {
        Node::Element(el) => pretty_element(el, depth, out),
        Node::Text(text) => {
            if !text.is_empty() {
                indent(depth, out);
                escape_text(text, out);
            }
        }
        Node::Fragment(nodes) => pretty_children(nodes, depth, out),
    }
}

/// Renders siblings one per line, with no trailing newline. Nodes that
/// produce no output produce no line.
pub(crate) fn pretty_children(nodes: &[Node], depth: usize, out: &mut String) {
    let mut separate = false;
    for node in nodes {
        let mark = out.len();
        if separate {
            out.push('\n');
        }
        let start = out.len();
        pretty(node, depth, out);
        if out.len() == start {
            out.truncate(mark);
        } else {
            separate = true;
        }
    }
}

pub(crate) fn pretty_element(el: &Element, depth: usize, out: &mut String) {
    indent(depth, out);

    if is_void(el.tag) {
        open_tag(el, out);
        return;
    }

    let block = el
        .children
        .iter()
        .any(|child| matches!(child, Node::Element(_)));

    if block {
        open_tag(el, out);
        out.push('\n');
        for child in &el.children {
            let start = out.len();
            pretty(child, depth + 1, out);
            if out.len() > start {
                out.push('\n');
            }
        }
        indent(depth, out);
        close_tag(el, out);
    } else {
        open_tag(el, out);
        for child in &el.children {
            if let Node::Text(text) = child {
                escape_text(text, out);
            }
        }
        close_tag(el, out);
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
