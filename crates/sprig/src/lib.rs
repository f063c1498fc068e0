// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! <div align="center">
//!
//! # Sprig
//!
//! _Declarative HTML trees, rendered deterministically._
//!
//! </div>
//!
//! **Sprig** builds web-style documents out of plain Rust values: element
//! constructors take their children as values, components are ordinary
//! functions taking a single props struct, and a finished tree serializes
//! to the same HTML text every time. There is no update loop; a view is
//! built once, mounted once, and printed.
//!
//! ### Hello World
//!
//! Any function that takes a props struct and returns a view is a
//! component:
//!
//! ```
//! use sprig::prelude::*;
//!
//! struct Hello {
//!     name: &'static str,
//! }
//!
//! fn hello(props: Hello) -> impl View {
//!     h1(("Hello ", props.name, "!"))
//! }
//!
//! let greeting = hello(Hello { name: "Sprig" });
//!
//! assert_eq!(greeting.build().to_html(), "<h1>Hello Sprig!</h1>");
//! ```
//!
//! Mounting installs a built tree into a [`Document`], the in-memory
//! stand-in for a host page:
//!
//! ```
//! use sprig::prelude::*;
//!
//! let mut doc = Document::new();
//! doc.body_mut().append(div(()).id("root"));
//!
//! sprig::mount(h2("Hi!"), &mut doc, "root").unwrap();
//!
//! assert_eq!(
//!     doc.to_html(),
//!     r#"<body><div id="root"><h2>Hi!</h2></div></body>"#,
//! );
//! ```

pub mod attribute;
pub mod branching;
pub mod dom;
pub mod html;
pub mod list;

mod render;
mod text;
mod value;

pub use dom::{Document, Element, MountError, Node};
pub use value::IntoText;

/// The prelude module with most commonly used types.
pub mod prelude {
    pub use crate::dom::{Document, Element, Node};
    pub use crate::html::*;
    pub use crate::list::list;
    pub use crate::{mount, IntoText, View};
}

/// Anything that can be built into a renderable [`Node`].
///
/// Views are descriptions of output: produced by pure functions, consumed
/// exactly once. Strings, numbers, elements, options, and tuples of views
/// are all views.
pub trait View: Sized {
    /// Builds the renderable node for this view.
    fn build(self) -> Node;
}

/// The unit type renders no output.
impl View for () {
    fn build(self) -> Node {
        Node::Fragment(Vec::new())
    }
}

macro_rules! impl_tuple_view {
    ($($var:ident),*) => {
        impl<$($var: View),*> View for ($($var,)*) {
            fn build(self) -> Node {
                #[allow(non_snake_case)]
                let ($($var,)*) = self;

                Node::Fragment(vec![$($var.build()),*])
            }
        }
    };
}

impl_tuple_view!(A);
impl_tuple_view!(A, B);
impl_tuple_view!(A, B, C);
impl_tuple_view!(A, B, C, D);
impl_tuple_view!(A, B, C, D, E);
impl_tuple_view!(A, B, C, D, E, F);
impl_tuple_view!(A, B, C, D, E, F, G);
impl_tuple_view!(A, B, C, D, E, F, G, H);
impl_tuple_view!(A, B, C, D, E, F, G, H, I);
impl_tuple_view!(A, B, C, D, E, F, G, H, I, J);
impl_tuple_view!(A, B, C, D, E, F, G, H, I, J, K);
impl_tuple_view!(A, B, C, D, E, F, G, H, I, J, K, L);

/// Builds `view` and installs it into the element with the given `id`,
/// replacing that element's current content.
///
/// Shorthand for [`Document::mount`].
pub fn mount(view: impl View, doc: &mut Document, id: &str) -> Result<(), MountError> {
    doc.mount(view, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::{h1, h2};

    #[test]
    fn unit_renders_nothing() {
        assert_eq!(().build().to_html(), "");
    }

    #[test]
    fn tuples_preserve_member_order() {
        let node = (h1("first"), h2("second")).build();

        assert_eq!(node.to_html(), "<h1>first</h1><h2>second</h2>");
    }

    #[test]
    fn mount_delegates_to_the_document() {
        let mut doc = Document::new();
        doc.body_mut().append(html::div(()).id("root"));

        mount(h1("hi"), &mut doc, "root").unwrap();

        assert_eq!(
            doc.to_html(),
            r#"<body><div id="root"><h1>hi</h1></div></body>"#,
        );
    }
}
