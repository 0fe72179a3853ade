//! fOS Markup
//!
//! Builds (or augments) one element from a compact selector plus an ordered
//! list of markup arguments: children, text, listeners, properties, inline
//! style, attributes and a scoped style class, all in one synchronous call.
//!
//! # Example
//! ```rust
//! use fos_css::StyleRegistry;
//! use fos_dom::Document;
//! use fos_markup::{Arg, Config, Engine, Shorthand};
//!
//! let mut doc = Document::default();
//! let mut styles = StyleRegistry::new();
//! let mut engine = Engine::new(&mut doc, &mut styles);
//!
//! let root = engine
//!     .construct(
//!         "div.panel#app",
//!         Config::with_markup(vec![Arg::Shorthand(vec![
//!             Shorthand::new("h1", vec!["Title".into()]),
//!             Shorthand::new("p", vec!["Paragraph".into()]),
//!         ])]),
//!     )
//!     .unwrap();
//!
//! assert_eq!(
//!     doc.outer_html(root),
//!     r#"<div class="panel" id="app"><h1>Title</h1><p>Paragraph</p></div>"#
//! );
//! ```
//!
//! Function values are evaluated once, at construction time. Nothing is
//! re-run later; there is no reactivity here.

mod binder;
mod contract;
mod dispatch;
mod engine;
mod host;
mod markup;
mod scope;
mod selector;
mod value;

pub use binder::{Binding, bind, classify, event_name, split_important};
pub use contract::DocumentModel;
pub use engine::{Config, Engine, EngineConfig, h};
pub use markup::{Arg, ArgKind, Markup, Scalar, Shorthand, Target};
pub use scope::{apply_style, generate_label};
pub use selector::{Selector, SelectorToken, parse_selector};
pub use value::{Bindings, Function, Value};

pub use fos_css::{CssError, StyleObject, StyleRegistry, StyleValue};
pub use fos_dom::{Event, Priority, PropValue};

/// Result type for construction
pub type BuildResult<T, E> = Result<T, BuildError<E>>;

/// Construction failure, passed through from the collaborator that raised it
#[derive(Debug, thiserror::Error)]
pub enum BuildError<E: std::error::Error + 'static> {
    /// The document refused an operation
    #[error(transparent)]
    Dom(E),
    /// Style compilation or registration failed
    #[error(transparent)]
    Style(#[from] CssError),
}
