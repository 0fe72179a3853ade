//! Document model contract
//!
//! Everything the engine needs from a document. The engine only ever talks
//! to this trait, so any tree that can create elements and text, append
//! children, store attributes and properties, hold inline style and
//! register listeners can be built with it.

use std::fmt::Debug;

use fos_dom::{EventCallback, Priority, PropValue, TokenList};

pub trait DocumentModel {
    /// Handle to a node owned by the document
    type Node: Clone + Debug;
    /// Error raised when the document refuses an operation
    type Error: std::error::Error + 'static;

    /// Create a detached element. Fails on an invalid tag name.
    fn create_element(&mut self, tag: &str) -> Result<Self::Node, Self::Error>;

    /// Create a detached text node
    fn create_text_node(&mut self, text: &str) -> Result<Self::Node, Self::Error>;

    /// Append `child` as the last child of `parent`, moving it if attached
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node)
    -> Result<(), Self::Error>;

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str)
    -> Result<(), Self::Error>;

    fn get_attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Assign a named property (`element[name] = value`)
    fn set_property(&mut self, node: &Self::Node, name: &str, value: PropValue)
    -> Result<(), Self::Error>;

    fn get_property(&self, node: &Self::Node, name: &str) -> Option<PropValue>;

    fn add_event_listener(
        &mut self,
        node: &Self::Node,
        event_type: &str,
        listener: EventCallback,
        capture: bool,
    ) -> Result<(), Self::Error>;

    /// Replace the whole inline style text
    fn set_style_text(&mut self, node: &Self::Node, css: &str) -> Result<(), Self::Error>;

    /// Set one inline style property
    fn set_style_property(
        &mut self,
        node: &Self::Node,
        name: &str,
        value: &str,
        priority: Priority,
    ) -> Result<(), Self::Error>;

    /// Append a token to the element's class list
    fn add_class(&mut self, node: &Self::Node, class: &str) -> Result<(), Self::Error> {
        let current = self.get_attribute(node, "class").unwrap_or_default();
        let mut classes = TokenList::from_string(&current);
        classes.push(class);
        self.set_attribute(node, "class", &classes.value())
    }
}
