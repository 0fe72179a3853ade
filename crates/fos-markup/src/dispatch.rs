//! Markup dispatcher
//!
//! Applies markup arguments to an element in list order.

use fos_css::StyleCompiler;

use crate::binder;
use crate::{Arg, BuildError, BuildResult, Config, DocumentModel, Engine, Markup, Shorthand};

impl<D: DocumentModel, C: StyleCompiler> Engine<'_, D, C> {
    pub(crate) fn apply_markup(
        &mut self,
        root: &D::Node,
        markup: Markup<D::Node>,
    ) -> BuildResult<(), D::Error> {
        match markup {
            Markup::Absent => Ok(()),
            // An empty string counts as no markup at all
            Markup::Text(text) if text.is_empty() => Ok(()),
            Markup::Text(text) => self.append_text(root, &text),
            Markup::List(args) => {
                for arg in args {
                    self.apply_arg(root, arg)?;
                }
                Ok(())
            }
        }
    }

    fn apply_arg(&mut self, root: &D::Node, arg: Arg<D::Node>) -> BuildResult<(), D::Error> {
        tracing::trace!("Applying {:?} argument", arg.kind());

        match arg {
            Arg::Absent => {}
            Arg::Shorthand(tuples) => {
                for Shorthand { target, markup } in tuples {
                    let child = self.build(target, Config::with_markup(markup))?;
                    self.doc.append_child(root, &child).map_err(BuildError::Dom)?;
                }
            }
            Arg::Text(text) => self.append_text(root, &text)?,
            Arg::Node(node) => self.doc.append_child(root, &node).map_err(BuildError::Dom)?,
            Arg::Scalar(scalar) => self.append_text(root, &scalar.to_string())?,
            Arg::Bindings(bindings) => {
                for (key, value) in bindings.iter() {
                    binder::bind(&mut *self.doc, root, key, value).map_err(BuildError::Dom)?;
                }
            }
            Arg::Function(_) => tracing::trace!("Ignoring function in markup position"),
        }
        Ok(())
    }

    fn append_text(&mut self, root: &D::Node, text: &str) -> BuildResult<(), D::Error> {
        let node = self.doc.create_text_node(text).map_err(BuildError::Dom)?;
        self.doc.append_child(root, &node).map_err(BuildError::Dom)
    }
}
