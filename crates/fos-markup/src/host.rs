//! `DocumentModel` for the fOS document

use fos_dom::{DomError, Document, EventCallback, NodeId, Priority, PropValue};

use crate::{Arg, DocumentModel, Target};

impl DocumentModel for Document {
    type Node = NodeId;
    type Error = DomError;

    fn create_element(&mut self, tag: &str) -> Result<NodeId, DomError> {
        Document::create_element(self, tag)
    }

    fn create_text_node(&mut self, text: &str) -> Result<NodeId, DomError> {
        Ok(Document::create_text_node(self, text))
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), DomError> {
        Document::append_child(self, *parent, *child)
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) -> Result<(), DomError> {
        Document::set_attribute(self, *node, name, value)
    }

    fn get_attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        Document::get_attribute(self, *node, name)
    }

    fn set_property(&mut self, node: &NodeId, name: &str, value: PropValue) -> Result<(), DomError> {
        Document::set_property(self, *node, name, value)
    }

    fn get_property(&self, node: &NodeId, name: &str) -> Option<PropValue> {
        Document::get_property(self, *node, name)
    }

    fn add_event_listener(
        &mut self,
        node: &NodeId,
        event_type: &str,
        listener: EventCallback,
        capture: bool,
    ) -> Result<(), DomError> {
        Document::add_event_listener(self, *node, event_type, listener, capture)
    }

    fn set_style_text(&mut self, node: &NodeId, css: &str) -> Result<(), DomError> {
        Document::set_style_text(self, *node, css)
    }

    fn set_style_property(
        &mut self,
        node: &NodeId,
        name: &str,
        value: &str,
        priority: Priority,
    ) -> Result<(), DomError> {
        Document::set_style_property(self, *node, name, value, priority)
    }
}

impl From<NodeId> for Target<NodeId> {
    fn from(node: NodeId) -> Self {
        Target::Node(node)
    }
}

impl From<NodeId> for Arg<NodeId> {
    fn from(node: NodeId) -> Self {
        Arg::Node(node)
    }
}
