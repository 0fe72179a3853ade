//! Document - High-level document API
//!
//! Element creation, attributes, reflected properties, inline style,
//! listeners and serialization on top of the `DomTree` arena.

use std::rc::Rc;

use url::Url;

use crate::serialize;
use crate::{
    CssStyleDeclaration, DomError, DomResult, DomTree, ElementData, Event, EventCallback,
    NodeId, Priority, PropValue, RegisteredListener, TokenList, is_valid_name,
};

/// Properties that read and write an attribute of a (possibly different) name
const STRING_REFLECTED: &[(&str, &str)] = &[
    ("id", "id"),
    ("className", "class"),
    ("htmlFor", "for"),
    ("name", "name"),
    ("type", "type"),
    ("title", "title"),
    ("alt", "alt"),
    ("lang", "lang"),
    ("dir", "dir"),
    ("placeholder", "placeholder"),
    ("rel", "rel"),
];

/// Properties reflected as attribute presence
const BOOLEAN_REFLECTED: &[&str] = &["hidden", "disabled"];

/// Properties whose attribute holds a URL resolved against the document
const URL_REFLECTED: &[&str] = &["href", "src", "action"];

#[derive(Debug, Clone, Copy)]
enum Reflection {
    Attribute(&'static str),
    Boolean(&'static str),
    Url(&'static str),
    Style,
    TextContent,
}

fn reflection(property: &str) -> Option<Reflection> {
    match property {
        "textContent" => return Some(Reflection::TextContent),
        "style" => return Some(Reflection::Style),
        _ => {}
    }
    if let Some(&(_, attr)) = STRING_REFLECTED.iter().find(|(p, _)| *p == property) {
        return Some(Reflection::Attribute(attr));
    }
    if let Some(&attr) = BOOLEAN_REFLECTED.iter().find(|a| **a == property) {
        return Some(Reflection::Boolean(attr));
    }
    URL_REFLECTED
        .iter()
        .find(|a| **a == property)
        .map(|&attr| Reflection::Url(attr))
}

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    /// Document URL
    url: String,
    /// Parsed base URL, if the document URL is absolute
    base: Option<Url>,
}

impl Document {
    /// Create an empty document at the given URL
    pub fn new(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            base: Url::parse(url).ok(),
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Document node
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    // ------------------------------------------------------------------
    // Nodes
    // ------------------------------------------------------------------

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> DomResult<NodeId> {
        if !is_valid_name(tag) {
            return Err(DomError::InvalidCharacter(tag.to_string()));
        }
        Ok(self.tree.create_element(tag))
    }

    /// Create a detached text node
    pub fn create_text_node(&mut self, text: &str) -> NodeId {
        self.tree.create_text(text)
    }

    /// Append a child, moving it if already attached
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.tree.append_child(parent, child)
    }

    /// Children in order
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.tree.children(id)
    }

    /// Parent node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.tree.parent(id)
    }

    /// Whether the node is an element
    pub fn is_element(&self, id: NodeId) -> bool {
        self.tree.get(id).is_some_and(|n| n.is_element())
    }

    /// Tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.tree.get(id)?.as_element().map(|e| e.tag.as_str())
    }

    /// Content of a text node
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.tree.get(id)?.as_text()
    }

    /// Concatenated descendant text
    pub fn text_content(&self, id: NodeId) -> String {
        self.tree.text_content(id)
    }

    /// Element data
    pub fn element(&self, id: NodeId) -> DomResult<&ElementData> {
        self.tree
            .get(id)
            .ok_or(DomError::NotFound(id))?
            .as_element()
            .ok_or(DomError::NotAnElement(id))
    }

    fn element_mut(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        self.tree
            .get_mut(id)
            .ok_or(DomError::NotFound(id))?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    /// Set an attribute. `style` goes through the inline declaration.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        if !is_valid_name(name) {
            return Err(DomError::InvalidCharacter(name.to_string()));
        }
        let elem = self.element_mut(id)?;
        if name == "style" {
            elem.style.set_css_text(value);
            elem.attrs.set_attribute("style", value);
        } else {
            elem.attrs.set_attribute(name, value);
        }
        Ok(())
    }

    /// Get an attribute value
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<String> {
        self.element(id)
            .ok()?
            .get_attr(name)
            .map(|v| v.to_string())
    }

    /// Check if an attribute is present
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.element(id).is_ok_and(|e| e.attrs.has_attribute(name))
    }

    /// Remove an attribute
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<()> {
        let elem = self.element_mut(id)?;
        elem.attrs.remove_attribute(name);
        if name == "style" {
            elem.style = CssStyleDeclaration::new();
        }
        Ok(())
    }

    /// Tokens of the `class` attribute
    pub fn class_list(&self, id: NodeId) -> TokenList {
        self.get_attribute(id, "class")
            .map(|c| TokenList::from_string(&c))
            .unwrap_or_default()
    }

    /// Value of the `id` attribute
    pub fn id(&self, id: NodeId) -> Option<String> {
        self.get_attribute(id, "id")
    }

    // ------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------

    /// Assign a property (`element[name] = value`)
    pub fn set_property(&mut self, id: NodeId, name: &str, value: PropValue) -> DomResult<()> {
        match reflection(name) {
            Some(Reflection::Attribute(attr)) | Some(Reflection::Url(attr)) => {
                self.set_attribute(id, attr, &value.to_string())
            }
            Some(Reflection::Boolean(attr)) => {
                if value.is_truthy() {
                    self.set_attribute(id, attr, "")
                } else {
                    self.remove_attribute(id, attr)
                }
            }
            Some(Reflection::Style) => {
                let text = match value {
                    PropValue::Null => String::new(),
                    other => other.to_string(),
                };
                self.set_style_text(id, &text)
            }
            Some(Reflection::TextContent) => {
                self.element(id)?;
                self.tree.remove_children(id);
                let text = match value {
                    PropValue::Null => String::new(),
                    other => other.to_string(),
                };
                if !text.is_empty() {
                    let node = self.tree.create_text(&text);
                    self.tree.append_child(id, node)?;
                }
                Ok(())
            }
            None => {
                self.element_mut(id)?.props.insert(name.to_string(), value);
                Ok(())
            }
        }
    }

    /// Read a property (`element[name]`)
    pub fn get_property(&self, id: NodeId, name: &str) -> Option<PropValue> {
        let elem = self.element(id).ok()?;
        match reflection(name) {
            Some(Reflection::Attribute(attr)) => {
                Some(PropValue::Text(elem.get_attr(attr).unwrap_or_default().to_string()))
            }
            Some(Reflection::Boolean(attr)) => Some(PropValue::Bool(elem.attrs.has_attribute(attr))),
            Some(Reflection::Url(attr)) => {
                let raw = elem.get_attr(attr).unwrap_or_default();
                Some(PropValue::Text(self.resolve_url(raw)))
            }
            Some(Reflection::Style) => Some(PropValue::Text(elem.style.css_text())),
            Some(Reflection::TextContent) => Some(PropValue::Text(self.text_content(id))),
            None => elem.props.get(name).cloned(),
        }
    }

    /// Resolve a URL attribute value against the document URL
    pub fn resolve_url(&self, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }
        let resolved = match &self.base {
            Some(base) => base.join(raw),
            None => Url::parse(raw),
        };
        match resolved {
            Ok(url) => url.to_string(),
            Err(e) => {
                tracing::trace!("Keeping unresolvable URL {:?}: {}", raw, e);
                raw.to_string()
            }
        }
    }

    // ------------------------------------------------------------------
    // Inline style
    // ------------------------------------------------------------------

    /// Inline style of an element
    pub fn style(&self, id: NodeId) -> Option<&CssStyleDeclaration> {
        self.element(id).ok().map(|e| &e.style)
    }

    /// Replace the inline style text (`style.cssText = text`)
    pub fn set_style_text(&mut self, id: NodeId, text: &str) -> DomResult<()> {
        self.set_attribute(id, "style", text)
    }

    /// Set one inline style property
    pub fn set_style_property(
        &mut self,
        id: NodeId,
        name: &str,
        value: &str,
        priority: Priority,
    ) -> DomResult<()> {
        let elem = self.element_mut(id)?;
        elem.style.set_property(name, value, priority);
        elem.sync_style_attr();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Register a listener
    pub fn add_event_listener(
        &mut self,
        id: NodeId,
        event_type: &str,
        callback: EventCallback,
        capture: bool,
    ) -> DomResult<()> {
        let elem = self.element_mut(id)?;
        elem.listeners.push(RegisteredListener {
            event_type: event_type.to_string(),
            callback,
            capture,
        });
        Ok(())
    }

    /// Number of listeners registered for an event type
    pub fn listener_count(&self, id: NodeId, event_type: &str) -> usize {
        self.element(id)
            .map(|e| e.listeners.iter().filter(|l| l.event_type == event_type).count())
            .unwrap_or(0)
    }

    /// Fire an event at a single element.
    ///
    /// Listeners run in registration order; the event does not propagate.
    /// Returns the number of listeners invoked.
    pub fn dispatch_event(&self, id: NodeId, event_type: &str) -> DomResult<usize> {
        let callbacks: Vec<EventCallback> = self
            .element(id)?
            .listeners
            .iter()
            .filter(|l| l.event_type == event_type)
            .map(|l| Rc::clone(&l.callback))
            .collect();

        tracing::trace!("Dispatching {} to {} ({} listeners)", event_type, id, callbacks.len());

        let event = Event::new(event_type, id);
        for callback in &callbacks {
            callback(&event);
        }
        Ok(callbacks.len())
    }

    // ------------------------------------------------------------------
    // Serialization
    // ------------------------------------------------------------------

    /// Serialize a node with its subtree
    pub fn outer_html(&self, id: NodeId) -> String {
        serialize::outer_html(&self.tree, id)
    }

    /// Serialize the children of a node
    pub fn inner_html(&self, id: NodeId) -> String {
        serialize::inner_html(&self.tree, id)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
