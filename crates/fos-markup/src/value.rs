//! Binding values
//!
//! Values found in markup binding objects: primitives, functions and
//! nested maps (`style` and `attrs`).

use std::fmt;
use std::rc::Rc;

use fos_dom::{Event, PropValue};
use indexmap::IndexMap;

/// Callable binding value.
///
/// Under an `on…` key it becomes an event listener and receives the event.
/// Under any other key it is called once, with no event, and its result is
/// used in its place.
#[derive(Clone)]
pub struct Function(Rc<dyn Fn(Option<&Event>) -> Value>);

impl Function {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Option<&Event>) -> Value + 'static,
    {
        Self(Rc::new(f))
    }

    /// Function computing a value at construction time
    pub fn computed<F, V>(f: F) -> Self
    where
        F: Fn() -> V + 'static,
        V: Into<Value>,
    {
        Self::new(move |_: Option<&Event>| -> Value { f().into() })
    }

    /// Function reacting to an event
    pub fn handler<F>(f: F) -> Self
    where
        F: Fn(&Event) + 'static,
    {
        Self::new(move |event: Option<&Event>| -> Value {
            if let Some(event) = event {
                f(event);
            }
            Value::Null
        })
    }

    pub fn call(&self, event: Option<&Event>) -> Value {
        (self.0)(event)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Function(..)")
    }
}

/// Value stored under a binding key
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Function(Function),
    Map(Bindings),
}

impl Value {
    /// Primitive form of this value, if it has one
    pub fn as_primitive(&self) -> Option<PropValue> {
        match self {
            Value::Null => Some(PropValue::Null),
            Value::Bool(b) => Some(PropValue::Bool(*b)),
            Value::Number(n) => Some(PropValue::Number(*n)),
            Value::Text(s) => Some(PropValue::Text(s.clone())),
            Value::Function(_) | Value::Map(_) => None,
        }
    }

    pub fn as_map(&self) -> Option<&Bindings> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

impl From<Bindings> for Value {
    fn from(map: Bindings) -> Self {
        Value::Map(map)
    }
}

impl From<PropValue> for Value {
    fn from(value: PropValue) -> Self {
        match value {
            PropValue::Null => Value::Null,
            PropValue::Bool(b) => Value::Bool(b),
            PropValue::Number(n) => Value::Number(n),
            PropValue::Text(s) => Value::Text(s),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Ordered key/value bindings; insertion order is application order
#[derive(Debug, Clone, Default)]
pub struct Bindings(IndexMap<String, Value>);

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace; a replaced key keeps its position
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_computed_function() {
        let f = Function::computed(|| "a.jpg");
        assert!(matches!(f.call(None), Value::Text(s) if s == "a.jpg"));
    }

    #[test]
    fn test_handler_ignores_missing_event() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let f = Function::handler(move |_: &Event| counter.set(counter.get() + 1));

        assert!(matches!(f.call(None), Value::Null));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_bindings_keep_order() {
        let bindings = Bindings::new().with("b", 1).with("a", "x").with("b", true);
        let keys: Vec<_> = bindings.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert!(matches!(bindings.get("b"), Some(Value::Bool(true))));
    }

    #[test]
    fn test_as_primitive() {
        assert_eq!(Value::from(5).as_primitive(), Some(PropValue::Number(5.0)));
        assert_eq!(Value::from(None::<&str>).as_primitive(), Some(PropValue::Null));
        assert!(Value::from(Bindings::new()).as_primitive().is_none());
    }
}
