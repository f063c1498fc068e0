// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Greeting components three ways.
//!
//! The smallest useful tour of sprig's component model: a component is a
//! plain function taking one props struct, and the three greeting functions
//! below differ only in how they take their fields out of it.

use log::debug;
use sprig::prelude::*;

#[cfg(test)]
mod tests;

/// Props for [`simple_greeting`].
struct GreetingProps {
    name: &'static str,
}

/// Reads its field through the props value.
fn simple_greeting(props: GreetingProps) -> impl View {
    h2(("Hello ", props.name, "!"))
}

/// Props shared by [`better_greeting`] and [`final_greeting`], and the
/// record [`app`] passes around whole.
struct PersonProps {
    first_name: &'static str,
    last_name: &'static str,
}

/// Destructures props at the top of the body instead of repeating `props.`.
fn better_greeting(props: PersonProps) -> impl View {
    let PersonProps {
        first_name,
        last_name,
    } = props;

    h3(("Hello, ", first_name, " ", last_name, "!"))
}

/// Destructures and renames right in the parameter list.
fn final_greeting(
    PersonProps {
        first_name: f,
        last_name: l,
    }: PersonProps,
) -> impl View {
    h4(("Yo, ", f, " ", l, "!"))
}

/// Composes every greeting into one tree.
fn app() -> impl View {
    let person = PersonProps {
        first_name: "Susan",
        last_name: "Jones",
    };

    div((
        h1("Hello World!"),
        simple_greeting(GreetingProps { name: "Bob" }),
        simple_greeting(GreetingProps { name: "Mary" }),
        better_greeting(PersonProps {
            first_name: "Joe",
            last_name: "Smith",
        }),
        // The same record handed over three ways; all three must render
        // identically.
        final_greeting(PersonProps { ..person }),
        final_greeting(PersonProps {
            first_name: person.first_name,
            last_name: person.last_name,
        }),
        final_greeting(person),
    ))
}

fn main() {
    env_logger::init();

    let mut doc = Document::new();
    doc.body_mut().append(div(()).id("root"));

    sprig::mount(app(), &mut doc, "root").expect("the host document has a #root element");

    let root = doc
        .get_element_by_id("root")
        .expect("the mount target is still in the document");

    debug!("mounted {} bytes of markup", root.inner_html().len());

    println!("{}", root.inner_html_pretty());
}
