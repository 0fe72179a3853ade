//! DOM Events
//!
//! Listener registration and the event object handed to listeners.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::NodeId;

/// Listener callback
pub type EventCallback = Rc<dyn Fn(&Event)>;

/// Event delivered to listeners
#[derive(Debug)]
pub struct Event {
    event_type: String,
    target: NodeId,
    pub bubbles: bool,
    pub cancelable: bool,
    default_prevented: Cell<bool>,
}

impl Event {
    /// Create a cancelable, bubbling event of the given type
    pub fn new(event_type: &str, target: NodeId) -> Self {
        Self {
            event_type: event_type.to_string(),
            target,
            bubbles: true,
            cancelable: true,
            default_prevented: Cell::new(false),
        }
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Prevent default action
    pub fn prevent_default(&self) {
        if self.cancelable {
            self.default_prevented.set(true);
        }
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// Listener stored on an element
#[derive(Clone)]
pub struct RegisteredListener {
    pub event_type: String,
    pub callback: EventCallback,
    pub capture: bool,
}

impl fmt::Debug for RegisteredListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredListener")
            .field("event_type", &self.event_type)
            .field("capture", &self.capture)
            .finish_non_exhaustive()
    }
}
