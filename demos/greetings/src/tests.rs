// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sprig::prelude::*;
use sprig::MountError;

use super::{app, better_greeting, final_greeting, simple_greeting, GreetingProps, PersonProps};

const EXPECTED: &str = "\
<div>
  <h1>Hello World!</h1>
  <h2>Hello Bob!</h2>
  <h2>Hello Mary!</h2>
  <h3>Hello, Joe Smith!</h3>
  <h4>Yo, Susan Jones!</h4>
  <h4>Yo, Susan Jones!</h4>
  <h4>Yo, Susan Jones!</h4>
</div>";

#[test]
fn simple_greeting_renders_a_level_two_heading() {
    let node = simple_greeting(GreetingProps { name: "Bob" }).build();

    assert_eq!(node.text_content(), "Hello Bob!");
    assert_eq!(node.to_html(), "<h2>Hello Bob!</h2>");
}

#[test]
fn repeated_invocations_render_identically() {
    // One call convention, so "tag" and "direct" invocations are the same
    // expression; two calls with equal props must agree byte for byte.
    let first = simple_greeting(GreetingProps { name: "Mary" }).build();
    let second = simple_greeting(GreetingProps { name: "Mary" }).build();

    assert_eq!(first, second);
    assert_eq!(first.to_html(), "<h2>Hello Mary!</h2>");
}

#[test]
fn better_greeting_renders_both_names() {
    let node = better_greeting(PersonProps {
        first_name: "Joe",
        last_name: "Smith",
    })
    .build();

    assert_eq!(node.text_content(), "Hello, Joe Smith!");
    assert_eq!(node.to_html(), "<h3>Hello, Joe Smith!</h3>");
}

#[test]
fn final_greeting_is_identical_across_call_conventions() {
    let person = PersonProps {
        first_name: "Susan",
        last_name: "Jones",
    };

    let spread = final_greeting(PersonProps { ..person }).build();
    let by_field = final_greeting(PersonProps {
        first_name: person.first_name,
        last_name: person.last_name,
    })
    .build();
    let whole = final_greeting(person).build();

    assert_eq!(spread.to_html(), "<h4>Yo, Susan Jones!</h4>");
    assert_eq!(spread.to_html(), by_field.to_html());
    assert_eq!(spread.to_html(), whole.to_html());
}

#[test]
fn app_renders_the_expected_markup() {
    let node = app().build();

    assert_eq!(node.to_html_pretty(), EXPECTED);
}

#[test]
fn app_renders_compactly_without_whitespace() {
    let node = app().build();

    assert_eq!(
        node.to_html(),
        "<div><h1>Hello World!</h1><h2>Hello Bob!</h2><h2>Hello Mary!</h2>\
         <h3>Hello, Joe Smith!</h3><h4>Yo, Susan Jones!</h4><h4>Yo, Susan Jones!</h4>\
         <h4>Yo, Susan Jones!</h4></div>"
    );
}

#[test]
fn app_mounts_into_the_host_document() {
    let mut doc = Document::new();
    doc.body_mut().append(div(()).id("root"));

    sprig::mount(app(), &mut doc, "root").unwrap();

    let root = doc.get_element_by_id("root").unwrap();
    assert_eq!(root.children().len(), 1);
    assert_eq!(root.first_element_child().unwrap().tag(), "div");
    assert_eq!(root.inner_html_pretty(), EXPECTED);
}

#[test]
fn mounting_again_replaces_the_previous_tree() {
    let mut doc = Document::new();
    doc.body_mut().append(div(()).id("root"));

    sprig::mount(app(), &mut doc, "root").unwrap();
    sprig::mount(app(), &mut doc, "root").unwrap();

    let root = doc.get_element_by_id("root").unwrap();
    assert_eq!(root.children().len(), 1);
    assert_eq!(root.inner_html_pretty(), EXPECTED);
}

#[test]
fn mounting_without_a_target_fails() {
    let mut doc = Document::new();

    let err = sprig::mount(app(), &mut doc, "root").unwrap_err();

    assert_eq!(err, MountError::TargetNotFound("root".into()));
}
