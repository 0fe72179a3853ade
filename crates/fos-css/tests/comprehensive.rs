//! Comprehensive tests for fos-css
//!
//! Style object compilation and registry behaviour.

use fos_css::{CssError, RegistryConfig, SheetCompiler, StyleCompiler, StyleObject, StyleRegistry, StyleValue};

// ============================================================================
// COMPILATION
// ============================================================================

#[test]
fn test_compile_camel_case_properties() {
    let style = StyleObject::new()
        .set("backgroundColor", "white")
        .set("borderTopWidth", 2)
        .set("zIndex", 10);

    let sheet = SheetCompiler::new().compile(&[("lbl", &style)]).unwrap();
    assert_eq!(
        sheet.css,
        ".fos-lbl-1 { background-color: white; border-top-width: 2px; z-index: 10; }"
    );
}

#[test]
fn test_compile_several_labels() {
    let a = StyleObject::new().set("color", "red");
    let b = StyleObject::new().set("color", "blue");

    let sheet = SheetCompiler::new().compile(&[("a", &a), ("b", &b)]).unwrap();
    assert_eq!(sheet.classes.len(), 2);
    assert_eq!(sheet.classes["a"], "fos-a-1");
    assert_eq!(sheet.classes["b"], "fos-b-2");
    assert_eq!(sheet.css.lines().count(), 2);
}

#[test]
fn test_custom_prefix() {
    let style = StyleObject::new().set("color", "red");
    let sheet = SheetCompiler::with_prefix("app").compile(&[("x", &style)]).unwrap();
    assert_eq!(sheet.classes["x"], "app-x-1");
}

#[test]
fn test_grouped_ampersand_selectors() {
    let style = StyleObject::new().set(
        "&:hover, &:focus",
        StyleObject::new().set("outline", "none"),
    );
    let sheet = SheetCompiler::new().compile(&[("g", &style)]).unwrap();
    assert_eq!(sheet.css, ".fos-g-1:hover, .fos-g-1:focus { outline: none; }");
}

#[test]
fn test_empty_style_produces_no_rule() {
    let sheet = SheetCompiler::new().compile(&[("e", &StyleObject::new())]).unwrap();
    assert_eq!(sheet.classes["e"], "fos-e-1");
    assert!(sheet.css.is_empty());
}

// ============================================================================
// SERDE
// ============================================================================

#[test]
fn test_style_object_from_json() {
    let style: StyleObject = serde_json::from_str(
        r#"{ "fontSize": 36, "color": "red", "&:hover": { "color": "blue" } }"#,
    )
    .unwrap();

    assert_eq!(style.get("fontSize"), Some(&StyleValue::Number(36.0)));
    assert!(matches!(style.get("&:hover"), Some(StyleValue::Nested(_))));

    let keys: Vec<_> = style.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["fontSize", "color", "&:hover"]);
}

// ============================================================================
// REGISTRY
// ============================================================================

#[test]
fn test_registry_accumulates_rules() {
    let mut registry = StyleRegistry::new();
    registry.register("one", &StyleObject::new().set("color", "red")).unwrap();
    registry.register("two", &StyleObject::new().set("color", "blue")).unwrap();

    let css = registry.to_css().unwrap();
    assert_eq!(css, ".fos-one-1 { color: red; }\n.fos-two-2 { color: blue; }");
}

#[test]
fn test_registry_propagates_compiler_errors() {
    let mut registry = StyleRegistry::new();
    let err = registry.register("bad.label", &StyleObject::new()).unwrap_err();
    assert_eq!(err, CssError::InvalidLabel("bad.label".to_string()));
}

#[test]
fn test_isolated_registries() {
    let mut first = StyleRegistry::new();
    let mut second = StyleRegistry::with_compiler(SheetCompiler::new(), RegistryConfig::default());
    let style = StyleObject::new().set("color", "red");

    assert_eq!(first.register("x", &style).unwrap(), "fos-x-1");
    assert_eq!(second.register("x", &style).unwrap(), "fos-x-1");
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}
