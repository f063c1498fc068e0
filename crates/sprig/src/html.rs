// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Constructor functions for common HTML elements.
//!
//! Each function builds an [`Element`] with the matching tag, taking its
//! children as a single [`View`] value. Pass a tuple to interleave text
//! with other views:
//!
//! ```
//! use sprig::prelude::*;
//!
//! let view = h1(("Hello ", "World", "!"));
//!
//! assert_eq!(view.to_html(), "<h1>Hello World!</h1>");
//! ```
//!
//! For tags not covered here, use [`Element::new`] directly.

use crate::dom::Element;
use crate::View;

macro_rules! elements {
    ($($tag:ident),* $(,)?) => {
        $(
            #[doc = concat!("Creates a `<", stringify!($tag), ">` element wrapping `children`.")]
            pub fn $tag(children: impl View) -> Element {
                Element::new(stringify!($tag), children)
            }
        )*
    };
}

macro_rules! void_elements {
    ($($tag:ident),* $(,)?) => {
        $(
            #[doc = concat!("Creates a childless `<", stringify!($tag), ">` element.")]
            pub fn $tag() -> Element {
                Element::new(stringify!($tag), ())
            }
        )*
    };
}

elements! {
    a,
    article,
    aside,
    button,
    code,
    div,
    em,
    footer,
    h1,
    h2,
    h3,
    h4,
    h5,
    h6,
    header,
    label,
    li,
    main,
    nav,
    ol,
    p,
    pre,
    section,
    span,
    strong,
    table,
    tbody,
    td,
    th,
    thead,
    tr,
    ul,
}

void_elements! {
    br,
    hr,
    img,
    input,
}
