// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use beef::Cow;

use crate::dom::Node;
use crate::View;

/// Values that convert to text for a text node or an attribute value.
pub trait IntoText {
    fn into_text(self) -> Cow<'static, str>;
}

macro_rules! impl_int {
    ($($ty:ty),*) => {
        $(
            impl IntoText for $ty {
                fn into_text(self) -> Cow<'static, str> {
                    let mut buf = itoa::Buffer::new();

                    Cow::owned(buf.format(self).to_owned())
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($ty:ty),*) => {
        $(
            impl IntoText for $ty {
                fn into_text(self) -> Cow<'static, str> {
                    let mut buf = dtoa::Buffer::new();

                    Cow::owned(buf.format(self).to_owned())
                }
            }
        )*
    };
}

impl_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float!(f32, f64);

impl IntoText for bool {
    fn into_text(self) -> Cow<'static, str> {
        Cow::borrowed(if self { "true" } else { "false" })
    }
}

macro_rules! impl_value_view {
    ($($ty:ty),*) => {
        $(
            impl View for $ty {
                fn build(self) -> Node {
                    Node::Text(self.into_text())
                }
            }

            impl View for &$ty {
                fn build(self) -> Node {
                    (*self).build()
                }
            }
        )*
    };
}

impl_value_view!(
    bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_render_as_decimal_text() {
        assert_eq!(&*42_u8.into_text(), "42");
        assert_eq!(&*(-7_i32).into_text(), "-7");
        assert_eq!(&*u64::MAX.into_text(), "18446744073709551615");
    }

    #[test]
    fn floats_keep_a_decimal_point() {
        assert_eq!(&*2.5_f64.into_text(), "2.5");
        assert_eq!(&*1.0_f32.into_text(), "1.0");
    }

    #[test]
    fn bools_render_as_keywords() {
        assert_eq!(&*true.into_text(), "true");
        assert_eq!(&*false.into_text(), "false");
    }

    #[test]
    fn values_render_as_text_nodes() {
        assert_eq!(42_i32.build().to_html(), "42");
        assert_eq!((&3.5_f64).build().to_html(), "3.5");
    }
}
