//! Scoped style
//!
//! `config.style` is compiled under a fresh random label, registered in the
//! shared stylesheet and its class added to the element.

use fos_css::{StyleCompiler, StyleObject, StyleRegistry};
use uuid::Uuid;

use crate::{BuildError, BuildResult, DocumentModel};

/// Random lowercase-hex label of `len` characters (1 to 32)
pub fn generate_label(len: usize) -> String {
    let mut label = Uuid::new_v4().simple().to_string();
    label.truncate(len.clamp(1, label.len()));
    label
}

/// Register `style` and add the resulting class to `node`.
///
/// Returns the class name.
pub fn apply_style<D: DocumentModel, C: StyleCompiler>(
    doc: &mut D,
    styles: &mut StyleRegistry<C>,
    node: &D::Node,
    style: &StyleObject,
    label_len: usize,
) -> BuildResult<String, D::Error> {
    let label = generate_label(label_len);
    let class_name = styles.register(&label, style)?;
    doc.add_class(node, &class_name).map_err(BuildError::Dom)?;
    tracing::debug!("Scoped style .{} applied to {:?}", class_name, node);
    Ok(class_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fos_dom::Document;

    #[test]
    fn test_label_shape() {
        let label = generate_label(8);
        assert_eq!(label.len(), 8);
        assert!(label.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(generate_label(100).len(), 32);
        assert_eq!(generate_label(0).len(), 1);
    }

    #[test]
    fn test_labels_differ() {
        assert_ne!(generate_label(32), generate_label(32));
    }

    #[test]
    fn test_apply_style_keeps_existing_classes() {
        let mut doc = Document::default();
        let mut styles = StyleRegistry::new();
        let div = doc.create_element("div").unwrap();
        doc.set_attribute(div, "class", "panel").unwrap();

        let class = apply_style(
            &mut doc,
            &mut styles,
            &div,
            &StyleObject::new().set("color", "red"),
            8,
        )
        .unwrap();

        assert_eq!(doc.class_list(div).item(0), Some("panel"));
        assert_eq!(doc.class_list(div).item(1), Some(class.as_str()));
        assert_eq!(styles.len(), 1);
    }
}
