// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element attributes.

use beef::Cow;

use crate::IntoText;

/// A single `name="value"` pair on an [`Element`](crate::dom::Element).
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    name: &'static str,
    value: Cow<'static, str>,
}

impl Attribute {
    /// Creates an attribute from any value that renders to text.
    pub fn new(name: &'static str, value: impl IntoText) -> Self {
        Attribute {
            name,
            value: value.into_text(),
        }
    }

    /// The attribute name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The attribute value as text.
    pub fn value(&self) -> &str {
        &self.value
    }
}
