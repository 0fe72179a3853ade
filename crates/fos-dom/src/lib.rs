//! fOS DOM - Document Object Model
//!
//! Arena-backed document used as the host for markup construction:
//! elements, text, attributes, reflected properties, inline style,
//! event listeners and HTML serialization.

mod attributes;
mod classlist;
mod document;
mod events;
mod node;
mod serialize;
mod style;
mod tree;

pub use attributes::{Attr, NamedNodeMap};
pub use classlist::TokenList;
pub use document::Document;
pub use events::{Event, EventCallback, RegisteredListener};
pub use node::{ElementData, Node, NodeData, PropValue, format_number};
pub use serialize::{escape_attr, escape_text, is_void_element};
pub use style::{CssStyleDeclaration, Priority, StyleDeclaration};
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Document node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Arena index of this node
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Tag or attribute name the document refuses
    #[error("Invalid character in name: {0:?}")]
    InvalidCharacter(String),
    /// Node not found
    #[error("Node not found: {0}")]
    NotFound(NodeId),
    /// Hierarchy error (e.g., inserting an ancestor, appending to text)
    #[error("Hierarchy request error")]
    HierarchyRequest,
    /// Operation needs an element but got another node kind
    #[error("Node {0} is not an element")]
    NotAnElement(NodeId),
}

/// Check a tag or attribute name against the characters markup cannot carry.
///
/// Namespaced (`ns:tag`) and non-ASCII names are accepted.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || matches!(c, '<' | '>' | '/' | '=' | '"' | '\'' | '\0')
        })
}
