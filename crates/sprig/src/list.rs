// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Utilities for rendering lists

use crate::dom::Node;
use crate::View;

/// Wrapper type that implements `View` for iterators, created by [`list`].
#[repr(transparent)]
pub struct List<T>(T);

/// Turns an [`IntoIterator`](IntoIterator) type into a [`View`](View),
/// rendering every item in order.
///
/// ```
/// use sprig::prelude::*;
///
/// let fruit = ["apple", "pear"];
/// let view = ul(list(fruit.iter().map(|name| li(*name))));
///
/// assert_eq!(
///     view.to_html(),
///     "<ul><li>apple</li><li>pear</li></ul>",
/// );
/// ```
pub const fn list<T>(iterator: T) -> List<T>
where
    T: IntoIterator,
    T::Item: View,
{
    List(iterator)
}

impl<T> View for List<T>
where
    T: IntoIterator,
    T::Item: View,
{
    fn build(self) -> Node {
        Node::Fragment(self.0.into_iter().map(View::build).collect())
    }
}

impl<V: View> View for Vec<V> {
    fn build(self) -> Node {
        Node::Fragment(self.into_iter().map(View::build).collect())
    }
}

impl<V: View, const N: usize> View for [V; N] {
    fn build(self) -> Node {
        Node::Fragment(self.into_iter().map(View::build).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::{li, ol, ul};

    #[test]
    fn items_render_in_iteration_order() {
        let view = ol(list((1..=3).map(|n| li(n))));

        assert_eq!(view.to_html(), "<ol><li>1</li><li>2</li><li>3</li></ol>");
    }

    #[test]
    fn an_empty_iterator_renders_nothing() {
        let items: Vec<&str> = Vec::new();
        let view = ol(list(items));

        assert_eq!(view.to_html(), "<ol></ol>");
    }

    #[test]
    fn vectors_and_arrays_are_views() {
        let from_vec = ul(vec![li("a"), li("b")]);
        let from_array = ul([li("a"), li("b")]);

        assert_eq!(from_vec.to_html(), "<ul><li>a</li><li>b</li></ul>");
        assert_eq!(from_vec.to_html(), from_array.to_html());
    }
}
