// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Utilities for conditional rendering
//!
//! Components return `impl View`, so `if` and `else` arms producing
//! different element shapes have mismatched types. The [`BranchN`
//! enums](self#enums) unify them:
//!
//! ```
//! use sprig::branching::Branch2;
//! use sprig::prelude::*;
//!
//! fn status(ok: bool) -> impl View {
//!     if ok {
//!         Branch2::A(p("all good"))
//!     } else {
//!         Branch2::B(strong("broken"))
//!     }
//! }
//!
//! assert_eq!(status(true).build().to_html(), "<p>all good</p>");
//! assert_eq!(status(false).build().to_html(), "<strong>broken</strong>");
//! ```
//!
//! For simple optional renders you can always use the standard library
//! [`Option`](Option); `None` renders nothing.

use crate::dom::Node;
use crate::View;

/// A view that is one of two types.
pub enum Branch2<A, B> {
    A(A),
    B(B),
}

impl<A, B> View for Branch2<A, B>
where
    A: View,
    B: View,
{
    fn build(self) -> Node {
        match self {
            Branch2::A(view) => view.build(),
            Branch2::B(view) => view.build(),
        }
    }
}

/// A view that is one of three types.
pub enum Branch3<A, B, C> {
    A(A),
    B(B),
    C(C),
}

impl<A, B, C> View for Branch3<A, B, C>
where
    A: View,
    B: View,
    C: View,
{
    fn build(self) -> Node {
        match self {
            Branch3::A(view) => view.build(),
            Branch3::B(view) => view.build(),
            Branch3::C(view) => view.build(),
        }
    }
}

impl<V: View> View for Option<V> {
    fn build(self) -> Node {
        match self {
            Some(view) => view.build(),
            None => Node::Fragment(Vec::new()),
        }
    }
}
