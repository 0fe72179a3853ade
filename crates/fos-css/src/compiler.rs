//! Style compiler
//!
//! Turns labelled style objects into CSS text and class names.

use indexmap::IndexMap;
use lightningcss::stylesheet::{ParserOptions, StyleSheet};

use crate::{CssError, CssResult, StyleObject, StyleValue, is_unitless, kebab_case};

/// Output of one compilation: label → class name, plus the CSS text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledSheet {
    pub classes: IndexMap<String, String>,
    pub css: String,
}

/// Compiles labelled style objects into a sheet
pub trait StyleCompiler {
    /// Compile every `(label, style)` pair into one sheet.
    fn compile(&mut self, rules: &[(&str, &StyleObject)]) -> CssResult<CompiledSheet>;
}

/// Default compiler.
///
/// Class names are `{prefix}-{label}-{serial}`; the serial increases with
/// every compiled rule, so equal styles never share a class.
#[derive(Debug, Clone)]
pub struct SheetCompiler {
    prefix: String,
    serial: u64,
}

impl SheetCompiler {
    pub fn new() -> Self {
        Self::with_prefix("fos")
    }

    /// Use a different class name prefix
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            serial: 0,
        }
    }

    fn class_name(&mut self, label: &str) -> CssResult<String> {
        let valid = !label.is_empty()
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(CssError::InvalidLabel(label.to_string()));
        }
        self.serial += 1;
        Ok(format!("{}-{}-{}", self.prefix, label, self.serial))
    }
}

impl Default for SheetCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleCompiler for SheetCompiler {
    fn compile(&mut self, rules: &[(&str, &StyleObject)]) -> CssResult<CompiledSheet> {
        let mut sheet = CompiledSheet::default();
        let mut blocks = Vec::new();

        for (label, style) in rules {
            let class_name = self.class_name(label)?;
            let selector = format!(".{}", class_name);
            let mut out = Vec::new();
            emit_rule(&selector, style, &mut out);
            validate(&selector, &out.join("\n"))?;

            blocks.extend(out);
            sheet.classes.insert(label.to_string(), class_name);
        }

        sheet.css = blocks.join("\n");
        Ok(sheet)
    }
}

/// Emit `selector { decls }` followed by the nested rules of `style`
fn emit_rule(selector: &str, style: &StyleObject, out: &mut Vec<String>) {
    let declarations: Vec<String> = style
        .iter()
        .filter_map(|(key, value)| {
            let property = kebab_case(key);
            match value {
                StyleValue::Text(text) => Some(format!("{}: {};", property, text)),
                StyleValue::Number(n) => Some(format!("{}: {};", property, number_value(&property, *n))),
                StyleValue::Nested(_) => None,
            }
        })
        .collect();

    if !declarations.is_empty() {
        out.push(format!("{} {{ {} }}", selector, declarations.join(" ")));
    }

    for (key, value) in style.iter() {
        let StyleValue::Nested(nested) = value else {
            continue;
        };
        if key.starts_with('@') {
            let mut inner = Vec::new();
            emit_rule(selector, nested, &mut inner);
            if !inner.is_empty() {
                out.push(format!("{} {{ {} }}", key, inner.join(" ")));
            }
        } else if key.contains('&') {
            let expanded = key
                .split(',')
                .map(|part| part.trim().replace('&', selector))
                .collect::<Vec<_>>()
                .join(", ");
            emit_rule(&expanded, nested, out);
        } else {
            emit_rule(&format!("{} {}", selector, key.trim()), nested, out);
        }
    }
}

fn number_value(property: &str, n: f64) -> String {
    let text = fos_dom::format_number(n);
    if n == 0.0 || is_unitless(property) || property.starts_with("--") {
        text
    } else {
        format!("{}px", text)
    }
}

fn validate(selector: &str, css: &str) -> CssResult<()> {
    StyleSheet::parse(css, ParserOptions::default())
        .map(|_| ())
        .map_err(|e| CssError::InvalidRule {
            selector: selector.to_string(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile_one(style: &StyleObject) -> CompiledSheet {
        SheetCompiler::new().compile(&[("abc12345", style)]).unwrap()
    }

    #[test]
    fn test_simple_rule() {
        let sheet = compile_one(&StyleObject::new().set("color", "red").set("fontSize", 36));
        assert_eq!(sheet.classes.get("abc12345").map(String::as_str), Some("fos-abc12345-1"));
        assert_eq!(sheet.css, ".fos-abc12345-1 { color: red; font-size: 36px; }");
    }

    #[test]
    fn test_unitless_and_zero() {
        let sheet = compile_one(&StyleObject::new().set("opacity", 0.5).set("margin", 0));
        assert_eq!(sheet.css, ".fos-abc12345-1 { opacity: 0.5; margin: 0; }");
    }

    #[test]
    fn test_nested_ampersand_and_media() {
        let style = StyleObject::new()
            .set("color", "red")
            .set("&:hover", StyleObject::new().set("color", "blue"))
            .set("@media (max-width: 600px)", StyleObject::new().set("display", "none"))
            .set("span", StyleObject::new().set("fontWeight", 700));

        let sheet = compile_one(&style);
        let lines: Vec<&str> = sheet.css.lines().collect();
        assert_eq!(
            lines,
            vec![
                ".fos-abc12345-1 { color: red; }",
                ".fos-abc12345-1:hover { color: blue; }",
                "@media (max-width: 600px) { .fos-abc12345-1 { display: none; } }",
                ".fos-abc12345-1 span { font-weight: 700; }",
            ]
        );
    }

    #[test]
    fn test_serial_increases() {
        let style = StyleObject::new().set("color", "red");
        let mut compiler = SheetCompiler::new();
        let a = compiler.compile(&[("same", &style)]).unwrap();
        let b = compiler.compile(&[("same", &style)]).unwrap();
        assert_ne!(a.classes["same"], b.classes["same"]);
    }

    #[test]
    fn test_invalid_label() {
        let style = StyleObject::new().set("color", "red");
        let err = SheetCompiler::new().compile(&[("has space", &style)]).unwrap_err();
        assert_eq!(err, CssError::InvalidLabel("has space".to_string()));
    }

    #[test]
    fn test_invalid_selector_rejected() {
        let style = StyleObject::new().set("> >", StyleObject::new().set("color", "red"));
        let err = SheetCompiler::new().compile(&[("abc", &style)]).unwrap_err();
        assert!(matches!(err, CssError::InvalidRule { .. }));
    }
}
