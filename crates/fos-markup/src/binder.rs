//! Property binder
//!
//! Applies one key/value pair of a binding object to an element. The first
//! matching rule wins:
//!
//! 1. function under `on<word>` → event listener
//! 2. any other function → called once, result assigned as a property
//! 3. `style` → inline style (text or per-property map)
//! 4. `attrs` → one attribute per entry
//! 5. `data-*` → attribute
//! 6. anything else → property

use std::rc::Rc;
use std::sync::LazyLock;

use fos_dom::{Event, EventCallback, Priority, PropValue};
use regex::Regex;

use crate::{Bindings, DocumentModel, Function, Value};

static IMPORTANT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^(.*?)\s*!\s*important\s*$").expect("valid !important pattern")
});

/// How a binding key is applied
#[derive(Debug, Clone, Copy)]
pub enum Binding<'v> {
    Listener(&'v Function),
    Computed(&'v Function),
    Style(&'v Value),
    Attributes(&'v Value),
    DataAttribute(&'v Value),
    Property(&'v Value),
}

/// Pick the rule for a key/value pair
pub fn classify<'v>(key: &str, value: &'v Value) -> Binding<'v> {
    if let Value::Function(f) = value {
        return if is_event_key(key) {
            Binding::Listener(f)
        } else {
            Binding::Computed(f)
        };
    }
    match key {
        "style" => Binding::Style(value),
        "attrs" => Binding::Attributes(value),
        k if k.starts_with("data-") => Binding::DataAttribute(value),
        _ => Binding::Property(value),
    }
}

fn is_event_key(key: &str) -> bool {
    key.strip_prefix("on")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Event type for an `on…` key: `onClick` listens for `click`
pub fn event_name(key: &str) -> String {
    key.get(2..).unwrap_or_default().to_ascii_lowercase()
}

/// Split a trailing `!important` marker off a style value
pub fn split_important(value: &str) -> (&str, Priority) {
    match IMPORTANT.captures(value).and_then(|c| c.get(1)) {
        Some(m) => (m.as_str(), Priority::Important),
        None => (value, Priority::Normal),
    }
}

/// Apply one binding to `node`
pub fn bind<D: DocumentModel>(
    doc: &mut D,
    node: &D::Node,
    key: &str,
    value: &Value,
) -> Result<(), D::Error> {
    let binding = classify(key, value);
    tracing::trace!("Binding {:?} as {:?}", key, binding);

    match binding {
        Binding::Listener(f) => {
            let f = f.clone();
            let callback: EventCallback = Rc::new(move |event: &Event| {
                f.call(Some(event));
            });
            let event_type = event_name(key);
            tracing::trace!("Registering {:?} listener on {:?}", event_type, node);
            doc.add_event_listener(node, &event_type, callback, false)
        }
        Binding::Computed(f) => assign_property(doc, node, key, &f.call(None)),
        Binding::Style(value) => apply_inline_style(doc, node, value),
        Binding::Attributes(value) => match value.as_map() {
            Some(attrs) => apply_attributes(doc, node, attrs),
            None => {
                tracing::trace!("Ignoring non-map attrs value");
                Ok(())
            }
        },
        Binding::DataAttribute(value) => match value.as_primitive() {
            Some(v) => doc.set_attribute(node, key, &v.to_string()),
            None => {
                tracing::trace!("Ignoring non-primitive value for {:?}", key);
                Ok(())
            }
        },
        Binding::Property(value) => assign_property(doc, node, key, value),
    }
}

fn assign_property<D: DocumentModel>(
    doc: &mut D,
    node: &D::Node,
    key: &str,
    value: &Value,
) -> Result<(), D::Error> {
    match value.as_primitive() {
        Some(v) => doc.set_property(node, key, v),
        None => {
            tracing::trace!("Ignoring non-primitive value for property {:?}", key);
            Ok(())
        }
    }
}

fn apply_inline_style<D: DocumentModel>(
    doc: &mut D,
    node: &D::Node,
    value: &Value,
) -> Result<(), D::Error> {
    let props = match value {
        Value::Text(css) => return doc.set_style_text(node, css),
        Value::Map(props) => props,
        _ => {
            tracing::trace!("Ignoring style value that is neither text nor map");
            return Ok(());
        }
    };

    for (name, raw) in props.iter() {
        let computed;
        let raw = match raw {
            Value::Function(f) => {
                computed = f.call(None);
                &computed
            }
            other => other,
        };
        let text = match raw.as_primitive() {
            Some(PropValue::Null) => String::new(),
            Some(v) => v.to_string(),
            None => continue,
        };
        let (text, priority) = split_important(&text);
        doc.set_style_property(node, name, text, priority)?;
    }
    Ok(())
}

fn apply_attributes<D: DocumentModel>(
    doc: &mut D,
    node: &D::Node,
    attrs: &Bindings,
) -> Result<(), D::Error> {
    for (name, value) in attrs.iter() {
        match value.as_primitive() {
            Some(v) => doc.set_attribute(node, name, &v.to_string())?,
            None => tracing::trace!("Ignoring non-primitive attribute {:?}", name),
        }
    }
    Ok(())
}
