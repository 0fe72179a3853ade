//! Style registry
//!
//! The stylesheet every scoped style is appended to. It lives as long as
//! the process (or the test) that owns it; rules are never removed.

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

use crate::{CompiledSheet, CssError, CssResult, SheetCompiler, StyleCompiler, StyleObject};

/// Registry options
#[derive(Debug, Clone, Default)]
pub struct RegistryConfig {
    /// Print `to_css` output minified
    pub minify: bool,
}

/// Append-only stylesheet of compiled scoped styles
#[derive(Debug)]
pub struct StyleRegistry<C: StyleCompiler = SheetCompiler> {
    compiler: C,
    sheets: Vec<CompiledSheet>,
    config: RegistryConfig,
}

impl StyleRegistry<SheetCompiler> {
    /// Registry with the default compiler
    pub fn new() -> Self {
        Self::with_compiler(SheetCompiler::new(), RegistryConfig::default())
    }
}

impl Default for StyleRegistry<SheetCompiler> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: StyleCompiler> StyleRegistry<C> {
    pub fn with_compiler(compiler: C, config: RegistryConfig) -> Self {
        Self {
            compiler,
            sheets: Vec::new(),
            config,
        }
    }

    /// Compile `style` under `label`, attach it and return the class name.
    ///
    /// Every call adds a new rule, even for a style registered before.
    pub fn register(&mut self, label: &str, style: &StyleObject) -> CssResult<String> {
        let sheet = self.compiler.compile(&[(label, style)])?;
        let class_name = sheet
            .classes
            .get(label)
            .cloned()
            .ok_or_else(|| CssError::InvalidLabel(label.to_string()))?;

        tracing::debug!("Registered style {} as .{}", label, class_name);
        self.attach(sheet);
        Ok(class_name)
    }

    /// Append an already compiled sheet
    pub fn attach(&mut self, sheet: CompiledSheet) {
        self.sheets.push(sheet);
    }

    /// Attached sheets in registration order
    pub fn sheets(&self) -> &[CompiledSheet] {
        &self.sheets
    }

    /// Class name registered for a label, if any (latest wins)
    pub fn class_name(&self, label: &str) -> Option<&str> {
        self.sheets
            .iter()
            .rev()
            .find_map(|s| s.classes.get(label))
            .map(String::as_str)
    }

    /// Number of attached sheets
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Whole stylesheet text
    pub fn to_css(&self) -> CssResult<String> {
        let css = self
            .sheets
            .iter()
            .map(|s| s.css.as_str())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        if !self.config.minify {
            return Ok(css);
        }

        let sheet = StyleSheet::parse(&css, ParserOptions::default()).map_err(|e| {
            CssError::InvalidRule {
                selector: "<registry>".to_string(),
                message: e.to_string(),
            }
        })?;
        let printed = sheet
            .to_css(PrinterOptions {
                minify: true,
                ..PrinterOptions::default()
            })
            .map_err(|e| CssError::Print(e.to_string()))?;
        Ok(printed.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_returns_class() {
        let mut registry = StyleRegistry::new();
        let class = registry
            .register("a1b2c3d4", &StyleObject::new().set("color", "red"))
            .unwrap();

        assert_eq!(class, "fos-a1b2c3d4-1");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.class_name("a1b2c3d4"), Some("fos-a1b2c3d4-1"));
    }

    #[test]
    fn test_equal_styles_are_not_deduplicated() {
        let mut registry = StyleRegistry::new();
        let style = StyleObject::new().set("color", "red");
        let first = registry.register("x", &style).unwrap();
        let second = registry.register("y", &style).unwrap();

        assert_ne!(first, second);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_failed_register_leaves_registry_untouched() {
        let mut registry = StyleRegistry::new();
        let style = StyleObject::new().set("color", "red");
        assert!(registry.register("", &style).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_to_css_minified() {
        let mut registry =
            StyleRegistry::with_compiler(SheetCompiler::new(), RegistryConfig { minify: true });
        registry
            .register("m", &StyleObject::new().set("color", "red").set("margin", 0))
            .unwrap();

        let css = registry.to_css().unwrap();
        assert!(css.starts_with(".fos-m-1{"), "unexpected output: {}", css);
        assert!(!css.contains('\n'));
    }
}
