// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The renderable node tree and the host document it mounts into.

use beef::Cow;
use thiserror::Error;

use crate::attribute::Attribute;
use crate::render;
use crate::{IntoText, View};

/// A single node of a renderable tree.
///
/// Nodes are produced by [`View::build`](crate::View::build) and consumed
/// either by a parent element or by [`Document::mount`]. A node carries no
/// identity beyond its position in the tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// An element with a tag, attributes, and children.
    Element(Element),
    /// A text node.
    Text(Cow<'static, str>),
    /// A sequence of sibling nodes with no element of its own.
    ///
    /// Fragments are transparent: they serialize as their members and
    /// dissolve when inserted into an element.
    Fragment(Vec<Node>),
}

impl Node {
    /// Creates a text node.
    pub fn text(text: impl IntoText) -> Self {
        Node::Text(text.into_text())
    }

    /// Concatenation of all descendant text, in document order, unescaped.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.collect_text(out),
            Node::Text(text) => out.push_str(text),
            Node::Fragment(nodes) => {
                for node in nodes {
                    node.collect_text(out);
                }
            }
        }
    }

    /// Serializes the node without any inserted whitespace.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        render::compact(self, &mut out);
        out
    }

    /// Serializes the node with one child per line, indented two spaces per
    /// level. Elements whose children are all text stay on a single line.
    pub fn to_html_pretty(&self) -> String {
        let mut out = String::new();
        render::pretty(self, 0, &mut out);
        out
    }
}

impl View for Node {
    fn build(self) -> Node {
        self
    }
}

/// An element node.
///
/// Constructed by the functions in [`html`](crate::html), or directly with
/// [`Element::new`] for tags that have no constructor. Children are built
/// eagerly, at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub(crate) tag: &'static str,
    pub(crate) attributes: Vec<Attribute>,
    // Never contains `Node::Fragment`; fragments are spliced on insertion.
    pub(crate) children: Vec<Node>,
}

impl Element {
    /// Creates an element wrapping whatever `children` renders to.
    pub fn new(tag: &'static str, children: impl View) -> Self {
        let mut el = Element {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        };
        el.push(children.build());
        el
    }

    fn push(&mut self, node: Node) {
        match node {
            Node::Fragment(nodes) => {
                for node in nodes {
                    self.push(node);
                }
            }
            node => self.children.push(node),
        }
    }

    /// Appends another child after the ones the element was built with.
    pub fn append(&mut self, child: impl View) {
        self.push(child.build());
    }

    pub(crate) fn replace_children(&mut self, node: Node) {
        self.children.clear();
        self.push(node);
    }

    /// Sets an attribute, consuming and returning the element.
    pub fn attr(mut self, name: &'static str, value: impl IntoText) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    /// Sets the `id` attribute.
    pub fn id(self, value: impl IntoText) -> Self {
        self.attr("id", value)
    }

    /// Sets the `class` attribute.
    pub fn class(self, value: impl IntoText) -> Self {
        self.attr("class", value)
    }

    /// Sets the `style` attribute.
    pub fn style(self, value: impl IntoText) -> Self {
        self.attr("style", value)
    }

    /// The element's tag name.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// All attributes, in the order they were set.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Value of the named attribute, if set.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name() == name)
            .map(Attribute::value)
    }

    /// The element's children.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// First child that is itself an element.
    pub fn first_element_child(&self) -> Option<&Element> {
        self.children.iter().find_map(|node| match node {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    /// Concatenation of all descendant text, in document order, unescaped.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Serializes the element without any inserted whitespace.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        render::compact_element(self, &mut out);
        out
    }

    /// Serializes the element in the indented form of
    /// [`Node::to_html_pretty`].
    pub fn to_html_pretty(&self) -> String {
        let mut out = String::new();
        render::pretty_element(self, 0, &mut out);
        out
    }

    /// Serializes the children only, without any inserted whitespace.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            render::compact(child, &mut out);
        }
        out
    }

    /// Serializes the children only, in indented form.
    pub fn inner_html_pretty(&self) -> String {
        let mut out = String::new();
        render::pretty_children(&self.children, 0, &mut out);
        out
    }

    fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.attribute("id") == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|node| match node {
            Node::Element(el) => el.find_by_id(id),
            _ => None,
        })
    }

    fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.attribute("id") == Some(id) {
            return Some(self);
        }
        for node in &mut self.children {
            if let Node::Element(el) = node {
                if let Some(found) = el.find_by_id_mut(id) {
                    return Some(found);
                }
            }
        }
        None
    }
}

impl View for Element {
    fn build(self) -> Node {
        Node::Element(self)
    }
}

/// The host surface a view tree is mounted into.
///
/// A `Document` owns a `<body>` element and nothing more: no window, no
/// scripts, no loading. It exists so a built tree has somewhere to go and a
/// deterministic way to come back out as text.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    body: Element,
}

impl Document {
    /// Creates a document with an empty `<body>`.
    pub fn new() -> Self {
        Document {
            body: Element::new("body", ()),
        }
    }

    /// The `<body>` element.
    pub fn body(&self) -> &Element {
        &self.body
    }

    /// Mutable access to the `<body>`, for assembling the host page.
    pub fn body_mut(&mut self) -> &mut Element {
        &mut self.body
    }

    /// First element with the given `id`, in depth-first document order.
    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.body.find_by_id(id)
    }

    /// Mutable variant of [`Document::get_element_by_id`].
    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.body.find_by_id_mut(id)
    }

    /// Builds `view` and installs it as the sole content of the element
    /// with the given `id`, replacing whatever was mounted there before.
    pub fn mount(&mut self, view: impl View, id: &str) -> Result<(), MountError> {
        let node = view.build();
        let target = self
            .get_element_by_id_mut(id)
            .ok_or_else(|| MountError::TargetNotFound(id.to_owned()))?;
        target.replace_children(node);
        Ok(())
    }

    /// Serializes the document without any inserted whitespace.
    pub fn to_html(&self) -> String {
        self.body.to_html()
    }

    /// Serializes the document in indented form.
    pub fn to_html_pretty(&self) -> String {
        self.body.to_html_pretty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors surfaced by [`Document::mount`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MountError {
    /// No element in the document carries the requested `id`.
    #[error("no element with id {0:?} in the document")]
    TargetNotFound(String),
}
