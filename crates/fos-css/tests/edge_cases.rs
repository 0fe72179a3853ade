//! Edge case tests for fos-css

use fos_css::{CssError, CssResult, CompiledSheet, RegistryConfig, StyleCompiler, StyleObject, StyleRegistry};

/// Compiler that hands back a fixed, hashed-looking name
struct FixedCompiler;

impl StyleCompiler for FixedCompiler {
    fn compile(&mut self, rules: &[(&str, &StyleObject)]) -> CssResult<CompiledSheet> {
        let mut sheet = CompiledSheet::default();
        for (label, _) in rules {
            sheet.classes.insert(label.to_string(), format!("h{}", label.len()));
        }
        Ok(sheet)
    }
}

/// Compiler that forgets to report the label
struct ForgetfulCompiler;

impl StyleCompiler for ForgetfulCompiler {
    fn compile(&mut self, _rules: &[(&str, &StyleObject)]) -> CssResult<CompiledSheet> {
        Ok(CompiledSheet::default())
    }
}

#[test]
fn test_custom_compiler_names_are_opaque() {
    let mut registry = StyleRegistry::with_compiler(FixedCompiler, RegistryConfig::default());
    let class = registry.register("abcd", &StyleObject::new()).unwrap();
    assert_eq!(class, "h4");
    assert_eq!(registry.to_css().unwrap(), "");
}

#[test]
fn test_missing_label_in_compiled_sheet() {
    let mut registry = StyleRegistry::with_compiler(ForgetfulCompiler, RegistryConfig::default());
    let err = registry.register("abcd", &StyleObject::new()).unwrap_err();
    assert_eq!(err, CssError::InvalidLabel("abcd".to_string()));
    assert!(registry.is_empty());
}

#[test]
fn test_negative_and_fractional_numbers() {
    let mut registry = StyleRegistry::new();
    registry
        .register("n", &StyleObject::new().set("marginLeft", -4).set("lineHeight", 1.5))
        .unwrap();
    assert_eq!(
        registry.to_css().unwrap(),
        ".fos-n-1 { margin-left: -4px; line-height: 1.5; }"
    );
}

#[test]
fn test_custom_property_keeps_case_and_number() {
    let mut registry = StyleRegistry::new();
    registry.register("c", &StyleObject::new().set("--gapSize", 3)).unwrap();
    assert_eq!(registry.to_css().unwrap(), ".fos-c-1 { --gapSize: 3; }");
}

#[test]
fn test_deeply_nested_rules() {
    let style = StyleObject::new().set(
        "ul",
        StyleObject::new().set("li", StyleObject::new().set("&:first-child", StyleObject::new().set("margin", 0))),
    );
    let mut registry = StyleRegistry::new();
    registry.register("d", &style).unwrap();
    assert_eq!(registry.to_css().unwrap(), ".fos-d-1 ul li:first-child { margin: 0; }");
}

#[test]
fn test_many_registrations_stay_unique() {
    let mut registry = StyleRegistry::new();
    let style = StyleObject::new().set("color", "red");
    let mut names = std::collections::HashSet::new();
    for _ in 0..200 {
        names.insert(registry.register("same", &style).unwrap());
    }
    assert_eq!(names.len(), 200);
    assert_eq!(registry.len(), 200);
}
