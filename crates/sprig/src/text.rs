// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use beef::Cow;

use crate::dom::Node;
use crate::{IntoText, View};

impl IntoText for &'static str {
    #[inline]
    fn into_text(self) -> Cow<'static, str> {
        Cow::borrowed(self)
    }
}

impl IntoText for String {
    #[inline]
    fn into_text(self) -> Cow<'static, str> {
        Cow::owned(self)
    }
}

impl IntoText for &String {
    #[inline]
    fn into_text(self) -> Cow<'static, str> {
        Cow::owned(self.clone())
    }
}

impl IntoText for std::borrow::Cow<'static, str> {
    #[inline]
    fn into_text(self) -> Cow<'static, str> {
        self.into()
    }
}

impl IntoText for Cow<'static, str> {
    #[inline]
    fn into_text(self) -> Cow<'static, str> {
        self
    }
}

macro_rules! impl_text_view {
    ($($ty:ty),*) => {
        $(
            impl View for $ty {
                #[inline]
                fn build(self) -> Node {
                    Node::Text(self.into_text())
                }
            }
        )*
    };
}

impl_text_view!(
    &'static str,
    String,
    &String,
    std::borrow::Cow<'static, str>,
    Cow<'static, str>
);
