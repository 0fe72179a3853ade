//! Edge case tests for fos-dom
//!
//! Unicode content, escaping, listener ordering and odd inputs.

use std::cell::RefCell;
use std::rc::Rc;

use fos_dom::{Document, Event, PropValue};

// ============================================================================
// TEXT & ESCAPING
// ============================================================================

#[test]
fn test_text_is_escaped_not_trimmed() {
    let mut doc = Document::default();
    let p = doc.create_element("p").unwrap();
    let text = doc.create_text_node("  <b>&</b>  ");
    doc.append_child(p, text).unwrap();

    assert_eq!(doc.text(text), Some("  <b>&</b>  "));
    assert_eq!(doc.outer_html(p), "<p>  &lt;b&gt;&amp;&lt;/b&gt;  </p>");
}

#[test]
fn test_unicode_names_and_values() {
    let mut doc = Document::default();
    let span = doc.create_element("span").unwrap();
    doc.set_attribute(span, "id", "⛄").unwrap();
    doc.set_attribute(span, "title", "Привет \"мир\"").unwrap();

    assert_eq!(
        doc.outer_html(span),
        r#"<span id="⛄" title="Привет &quot;мир&quot;"></span>"#
    );
}

#[test]
fn test_void_element_ignores_children_on_output() {
    let mut doc = Document::default();
    let img = doc.create_element("img").unwrap();
    doc.set_attribute(img, "src", "cat.png").unwrap();
    assert_eq!(doc.outer_html(img), r#"<img src="cat.png">"#);
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_number_property_reflects_as_text() {
    let mut doc = Document::default();
    let input = doc.create_element("input").unwrap();
    doc.set_property(input, "title", PropValue::Number(5.0)).unwrap();
    assert_eq!(doc.get_attribute(input, "title").as_deref(), Some("5"));
}

#[test]
fn test_relative_url_without_base_stays_raw() {
    let mut doc = Document::default();
    let img = doc.create_element("img").unwrap();
    doc.set_property(img, "src", "cat.png".into()).unwrap();
    assert_eq!(doc.get_property(img, "src"), Some(PropValue::from("cat.png")));
}

#[test]
fn test_text_content_null_clears() {
    let mut doc = Document::default();
    let p = doc.create_element("p").unwrap();
    doc.set_property(p, "textContent", "x".into()).unwrap();
    doc.set_property(p, "textContent", PropValue::Null).unwrap();
    assert!(doc.children(p).is_empty());
}

// ============================================================================
// EVENTS
// ============================================================================

#[test]
fn test_listeners_fire_in_registration_order() {
    let mut doc = Document::default();
    let button = doc.create_element("button").unwrap();
    let log = Rc::new(RefCell::new(Vec::new()));

    for label in ["first", "second", "third"] {
        let log = Rc::clone(&log);
        doc.add_event_listener(
            button,
            "click",
            Rc::new(move |event: &Event| log.borrow_mut().push((label, event.event_type().to_string()))),
            false,
        )
        .unwrap();
    }

    assert_eq!(doc.listener_count(button, "click"), 3);
    doc.dispatch_event(button, "click").unwrap();

    let log = log.borrow();
    assert_eq!(log.iter().map(|(l, _)| *l).collect::<Vec<_>>(), vec!["first", "second", "third"]);
    assert!(log.iter().all(|(_, t)| t == "click"));
}

#[test]
fn test_dispatch_to_text_node_fails() {
    let mut doc = Document::default();
    let text = doc.create_text_node("x");
    assert!(doc.dispatch_event(text, "click").is_err());
}

// ============================================================================
// STRESS
// ============================================================================

#[test]
fn test_many_children_keep_order() {
    let mut doc = Document::default();
    let ul = doc.create_element("ul").unwrap();
    for i in 0..500 {
        let li = doc.create_element("li").unwrap();
        let text = doc.create_text_node(&i.to_string());
        doc.append_child(li, text).unwrap();
        doc.append_child(ul, li).unwrap();
    }

    let children = doc.children(ul);
    assert_eq!(children.len(), 500);
    assert_eq!(doc.text_content(children[499]), "499");
}
