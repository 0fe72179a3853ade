//! fOS CSS - Scoped styles
//!
//! Compiles style objects (nested maps of camelCase properties) into CSS
//! rules keyed by a generated label, validates them with lightningcss, and
//! keeps them in a process-wide registry.

mod compiler;
mod object;
mod registry;

pub use compiler::{CompiledSheet, SheetCompiler, StyleCompiler};
pub use object::{StyleObject, StyleValue, is_unitless, kebab_case};
pub use registry::{RegistryConfig, StyleRegistry};

/// Result type for style compilation
pub type CssResult<T> = Result<T, CssError>;

/// CSS compilation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CssError {
    /// lightningcss rejected the generated rule
    #[error("Invalid style rule for {selector}: {message}")]
    InvalidRule { selector: String, message: String },
    /// Label cannot be used inside a class name
    #[error("Invalid style label: {0:?}")]
    InvalidLabel(String),
    /// Printing the registered sheet failed
    #[error("Failed to print stylesheet: {0}")]
    Print(String),
}
