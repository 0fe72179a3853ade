//! Construction engine
//!
//! Entry point: `construct(target, config)` builds or augments one element.

use fos_css::{SheetCompiler, StyleCompiler, StyleObject, StyleRegistry};

use crate::{Arg, BuildError, BuildResult, DocumentModel, Markup, Target, scope, selector};

/// Engine options
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Tag used when a selector names none
    pub default_tag: String,
    /// Length of generated style labels
    pub label_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_tag: "div".to_string(),
            label_len: 8,
        }
    }
}

/// What to put into the element
#[derive(Debug, Clone)]
pub struct Config<N> {
    pub markup: Markup<N>,
    /// Scoped style compiled into a fresh class on the element
    pub style: Option<StyleObject>,
}

impl<N> Default for Config<N> {
    fn default() -> Self {
        Self {
            markup: Markup::Absent,
            style: None,
        }
    }
}

impl<N> Config<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config with an argument list as markup
    pub fn with_markup(args: Vec<Arg<N>>) -> Self {
        Self::new().markup(args)
    }

    pub fn markup(mut self, markup: impl Into<Markup<N>>) -> Self {
        self.markup = markup.into();
        self
    }

    pub fn style(mut self, style: StyleObject) -> Self {
        self.style = Some(style);
        self
    }
}

/// Builds elements in a document, registering scoped styles in a registry
pub struct Engine<'a, D: DocumentModel, C: StyleCompiler = SheetCompiler> {
    pub(crate) doc: &'a mut D,
    styles: &'a mut StyleRegistry<C>,
    config: EngineConfig,
}

impl<'a, D: DocumentModel, C: StyleCompiler> Engine<'a, D, C> {
    pub fn new(doc: &'a mut D, styles: &'a mut StyleRegistry<C>) -> Self {
        Self::with_config(doc, styles, EngineConfig::default())
    }

    pub fn with_config(
        doc: &'a mut D,
        styles: &'a mut StyleRegistry<C>,
        config: EngineConfig,
    ) -> Self {
        Self { doc, styles, config }
    }

    pub fn document(&self) -> &D {
        &*self.doc
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut *self.doc
    }

    pub fn styles(&self) -> &StyleRegistry<C> {
        &*self.styles
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build a new element from a selector, or augment an existing node,
    /// and return it.
    ///
    /// Markup is applied first, in list order, then the scoped style. A new
    /// element is left detached. On error, changes made so far stay.
    pub fn construct(
        &mut self,
        target: impl Into<Target<D::Node>>,
        config: Config<D::Node>,
    ) -> BuildResult<D::Node, D::Error> {
        self.build(target.into(), config)
            .inspect_err(|e| tracing::warn!("Element construction failed: {}", e))
    }

    pub(crate) fn build(
        &mut self,
        target: Target<D::Node>,
        config: Config<D::Node>,
    ) -> BuildResult<D::Node, D::Error> {
        let root = match target {
            Target::Node(node) => node,
            Target::Selector(s) => {
                selector::parse_selector(&mut *self.doc, &s, &self.config.default_tag)
                    .map_err(BuildError::Dom)?
            }
        };
        let arg_count = match &config.markup {
            Markup::Absent => 0,
            Markup::Text(_) => 1,
            Markup::List(args) => args.len(),
        };
        tracing::debug!("Constructing {:?} with {} markup arguments", root, arg_count);

        self.apply_markup(&root, config.markup)?;

        if let Some(style) = &config.style {
            scope::apply_style(
                &mut *self.doc,
                &mut *self.styles,
                &root,
                style,
                self.config.label_len,
            )?;
        }
        Ok(root)
    }
}

/// Construct with a one-off engine
pub fn h<D: DocumentModel, C: StyleCompiler>(
    doc: &mut D,
    styles: &mut StyleRegistry<C>,
    target: impl Into<Target<D::Node>>,
    config: Config<D::Node>,
) -> BuildResult<D::Node, D::Error> {
    Engine::new(doc, styles).construct(target, config)
}
