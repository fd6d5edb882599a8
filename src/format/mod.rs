//! Output formats and the visitor that drives them.
//!
//! An [`OutputFormat`] is a small policy object: which template to render,
//! which macro libraries it needs, which style sheet derives its formatting
//! clauses, and whether the output is nested. [`TemplateVisitor`] plugs a
//! format into the depth-first walk of a dependency tree.

mod dot;
mod json;

pub use dot::{DotFormat, DotLayout};
pub use json::JsonFormat;

use std::io::Write;

use crate::models::{DependencyNode, DependencyNodeVisitor};
use crate::style::StyleSheet;
use crate::templating::{TemplateEngine, TeraTemplateEngine};
use crate::tree::{NamespaceRules, TraversalAccumulator};

/// Template, macros and style of one output format.
pub trait OutputFormat {
    /// Short name, e.g. `dot`.
    fn name(&self) -> &str;

    /// Template rendered once per root.
    fn template(&self) -> &str;

    /// Macro libraries loaded with the template.
    fn macros(&self) -> Vec<String>;

    fn style_sheet(&self) -> &dyn StyleSheet;

    /// Whether the output nests children inside their parents.
    fn nested(&self) -> bool;
}

/// Renders every root of a walk to `sink` through an [`OutputFormat`].
///
/// Each root gets its own [`TraversalAccumulator`]; when the root's
/// `end_visit` arrives the session is rendered, written and dropped. A failed
/// root is logged and reported as `false` from `end_visit`, and the next root
/// starts with a fresh session.
pub struct TemplateVisitor<W, F, E = TeraTemplateEngine> {
    sink: W,
    format: F,
    engine: E,
    rules: NamespaceRules,
    session: Option<TraversalAccumulator>,
    rendered: usize,
    failed: usize,
}

impl<W: Write, F: OutputFormat> TemplateVisitor<W, F> {
    pub fn new(sink: W, format: F) -> Self {
        Self::with_engine(sink, format, TeraTemplateEngine::default())
    }
}

impl<W: Write, F: OutputFormat, E: TemplateEngine> TemplateVisitor<W, F, E> {
    pub fn with_engine(sink: W, format: F, engine: E) -> Self {
        Self {
            sink,
            format,
            engine,
            rules: NamespaceRules::default(),
            session: None,
            rendered: 0,
            failed: 0,
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: NamespaceRules) -> Self {
        self.rules = rules;
        self
    }

    /// Roots rendered and written successfully.
    pub fn rendered(&self) -> usize {
        self.rendered
    }

    /// Roots whose render or write failed.
    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    fn finish(&mut self, session: TraversalAccumulator) -> bool {
        let template = self.format.template().to_string();
        let macros = self.format.macros();
        let title = session.roots().first().map(|root| session.node(*root).key().to_string());

        let result = session.render(
            &mut self.engine,
            &template,
            &macros,
            self.format.style_sheet(),
            self.format.nested(),
        );

        let text = match result {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(
                    "failed to render {} output for {}: {}",
                    self.format.name(),
                    title.as_deref().unwrap_or("<no root>"),
                    e
                );
                self.failed += 1;
                return false;
            }
        };

        if let Err(e) = self.sink.write_all(text.as_bytes()).and_then(|()| self.sink.flush()) {
            tracing::error!("failed to write {} output: {}", self.format.name(), e);
            self.failed += 1;
            return false;
        }

        self.rendered += 1;
        true
    }
}

impl<W: Write, F: OutputFormat, E: TemplateEngine> DependencyNodeVisitor for TemplateVisitor<W, F, E> {
    fn visit(&mut self, node: &dyn DependencyNode) -> bool {
        let rules = &self.rules;
        let session = self.session.get_or_insert_with(|| TraversalAccumulator::new(rules.clone()));
        session.visit(node.coordinate(), node.parent())
    }

    fn end_visit(&mut self, node: &dyn DependencyNode) -> bool {
        let Some(session) = self.session.as_mut() else {
            tracing::warn!("end of visit for {} without a session", node.coordinate());
            return false;
        };

        if !session.leave(node.coordinate()) {
            return true;
        }

        let Some(session) = self.session.take() else {
            return false;
        };

        if !session.is_root(node.coordinate()) {
            tracing::warn!(
                "traversal ended at {}, which is not a root; dropping {} node(s)",
                node.coordinate(),
                session.nodes().len()
            );
            self.failed += 1;
            return false;
        }

        self.finish(session)
    }
}
