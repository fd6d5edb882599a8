//! Template engine abstraction and its Tera implementation.

use regex::Regex;
use serde::Serialize;
use std::collections::VecDeque;
use tera::{Context as TeraContext, Tera};

use super::directives;
use super::error::TemplateError;
use super::loader::ResourceLoader;
use crate::style::{StyleSheet, StyleView};

/// Name under which an inline template is compiled.
pub const DYNAMIC_TEMPLATE_NAME: &str = "dynamic";

/// Line terminator of rendered output on this platform.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator of rendered output on this platform.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

const REFERENCE_PATTERN: &str = r#"\{%-?\s*(import|include|extends)\s+["']([^"']+)["'](\s+ignore\s+missing)?"#;

/// A text template engine with a per-evaluation binding.
///
/// Binding calls chain; [`TemplateEngine::evaluate`] consumes the binding, so
/// each evaluation starts from scratch whether or not the previous one failed.
/// A named template takes precedence over an inline one.
pub trait TemplateEngine {
    /// Whether `name` can be located.
    fn resource_exists(&self, name: &str) -> bool;

    /// Bind a template by name. Lookup happens at evaluation time.
    fn with_template_name(&mut self, name: &str) -> &mut Self;

    /// Bind an inline template.
    fn with_dynamic_template(&mut self, source: &str) -> &mut Self;

    /// Add macro libraries to load alongside the template.
    fn with_macros<S: AsRef<str>>(&mut self, names: &[S]) -> &mut Self;

    /// Bind the style, exposed to templates as `style`.
    fn with_style(&mut self, sheet: &dyn StyleSheet) -> &mut Self;

    /// Bind a value into the render context.
    fn put<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<&mut Self, TemplateError>;

    /// Drop the current binding.
    fn clear(&mut self);

    /// Render the bound template and clean up the result.
    fn evaluate(&mut self) -> Result<String, TemplateError>;
}

#[derive(Debug, Default)]
struct Binding {
    template: Option<String>,
    dynamic: Option<String>,
    macros: Vec<String>,
    style: Option<StyleView>,
    context: TeraContext,
}

/// [`TemplateEngine`] backed by Tera.
///
/// The loader is set up once; a fresh `Tera` instance is assembled for every
/// evaluation from the bound template, its macro libraries and whatever they
/// import, with the `indent` and `collapse` directives registered.
///
/// # Examples
///
/// ```rust
/// use deptree_cli::templating::{ResourceLoader, TemplateEngine, TeraTemplateEngine};
///
/// let mut engine = TeraTemplateEngine::new(ResourceLoader::new());
/// let text = engine
///     .with_dynamic_template("Hello, {{ name }}!")
///     .put("name", "world")?
///     .evaluate()?;
/// assert_eq!(text, "Hello, world!");
/// # Ok::<(), deptree_cli::templating::TemplateError>(())
/// ```
#[derive(Debug, Default)]
pub struct TeraTemplateEngine {
    loader: ResourceLoader,
    binding: Binding,
}

impl TeraTemplateEngine {
    pub fn new(loader: ResourceLoader) -> Self {
        Self {
            loader,
            binding: Binding::default(),
        }
    }

    pub fn loader(&self) -> &ResourceLoader {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut ResourceLoader {
        &mut self.loader
    }

    /// The template plus every macro library it needs, with imported, included
    /// and extended templates resolved transitively through the loader.
    fn collect_sources(
        &self,
        name: &str,
        source: String,
        macros: &[String],
    ) -> Result<Vec<(String, String)>, TemplateError> {
        let mut sources: Vec<(String, String)> = Vec::new();
        let mut pending: VecDeque<(String, Option<String>)> = VecDeque::new();
        pending.push_back((name.to_string(), Some(source)));
        pending.extend(macros.iter().map(|library| (library.clone(), None)));

        while let Some((library, source)) = pending.pop_front() {
            if sources.iter().any(|(known, _)| *known == library) {
                continue;
            }

            let source = match source {
                Some(source) => source,
                None => self.loader.load(&library)?,
            };

            for reference in references(&source) {
                if reference.optional && !self.loader.exists(&reference.name) {
                    tracing::trace!("'{}' skips missing '{}'", library, reference.name);
                    continue;
                }
                tracing::trace!("'{}' {}s '{}'", library, reference.tag, reference.name);
                pending.push_back((reference.name, None));
            }
            sources.push((library, source));
        }

        Ok(sources)
    }
}

impl TemplateEngine for TeraTemplateEngine {
    fn resource_exists(&self, name: &str) -> bool {
        self.loader.exists(name)
    }

    fn with_template_name(&mut self, name: &str) -> &mut Self {
        self.binding.template = Some(name.to_string());
        self
    }

    fn with_dynamic_template(&mut self, source: &str) -> &mut Self {
        self.binding.dynamic = Some(source.to_string());
        self
    }

    fn with_macros<S: AsRef<str>>(&mut self, names: &[S]) -> &mut Self {
        self.binding.macros.extend(names.iter().map(|name| name.as_ref().to_string()));
        self
    }

    fn with_style(&mut self, sheet: &dyn StyleSheet) -> &mut Self {
        self.binding.style = Some(StyleView::new(sheet));
        self
    }

    fn put<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<&mut Self, TemplateError> {
        self.binding.context.try_insert(key, value).map_err(|e| TemplateError::Context {
            key: key.to_string(),
            message: format_tera_error(&e),
        })?;
        Ok(self)
    }

    fn clear(&mut self) {
        self.binding = Binding::default();
    }

    fn evaluate(&mut self) -> Result<String, TemplateError> {
        let binding = std::mem::take(&mut self.binding);

        let (name, source) = match (binding.template, binding.dynamic) {
            (Some(name), _) => {
                let source = self.loader.load(&name)?;
                (name, source)
            }
            (None, Some(source)) => (DYNAMIC_TEMPLATE_NAME.to_string(), source),
            (None, None) => return Err(TemplateError::NoTemplateSpecified),
        };

        let span = tracing::debug_span!("evaluate", template = %name);
        let _guard = span.enter();

        let sources = self.collect_sources(&name, source, &binding.macros)?;
        tracing::debug!("compiling {} template source(s)", sources.len());

        // Fresh instance per evaluation; nothing survives into the next one.
        let mut tera = Tera::default();
        directives::register(&mut tera);
        tera.add_raw_templates(sources).map_err(|e| TemplateError::ParseError {
            name: name.clone(),
            line: error_line(&e),
            message: format_tera_error(&e),
        })?;

        let mut context = binding.context;
        if let Some(style) = binding.style {
            context.try_insert("style", &style).map_err(|e| TemplateError::Context {
                key: "style".to_string(),
                message: format_tera_error(&e),
            })?;
        }

        let rendered = tera.render(&name, &context).map_err(|e| TemplateError::RenderFailed {
            name: name.clone(),
            message: format_tera_error(&e),
        })?;

        tracing::debug!("rendered {} bytes", rendered.len());
        Ok(cleanup(&rendered))
    }
}

/// Trim, restore a single trailing line terminator on multi-line output, and
/// normalize line terminators to [`LINE_ENDING`].
pub fn cleanup(text: &str) -> String {
    let mut out = text.trim().replace("\r\n", "\n");
    if out.contains('\n') {
        out.push('\n');
    }
    if LINE_ENDING == "\n" {
        out
    } else {
        out.replace('\n', LINE_ENDING)
    }
}

/// A template named by `import`, `include` or `extends`.
#[derive(Debug, PartialEq, Eq)]
struct Reference {
    tag: String,
    name: String,
    /// `{% include "name" ignore missing %}`
    optional: bool,
}

/// Templates referenced by `source`, in order of appearance.
fn references(source: &str) -> Vec<Reference> {
    let Ok(re) = Regex::new(REFERENCE_PATTERN) else {
        return Vec::new();
    };
    re.captures_iter(source)
        .filter_map(|caps| {
            Some(Reference {
                tag: caps.get(1)?.as_str().to_string(),
                name: caps.get(2)?.as_str().to_string(),
                optional: caps.get(3).is_some(),
            })
        })
        .collect()
}

/// Every message along a Tera error's source chain.
pub fn format_tera_error(error: &tera::Error) -> String {
    use std::error::Error;

    let mut messages = vec![error.to_string()];
    let mut current = error.source();
    while let Some(err) = current {
        let message = err.to_string();
        if !message.trim().is_empty() {
            messages.push(message);
        }
        current = err.source();
    }
    messages.join(": ")
}

/// Line number from the `line:column` position Tera embeds in parse errors.
fn error_line(error: &tera::Error) -> Option<usize> {
    let message = format_tera_error(error);
    let re = Regex::new(r"(\d+):(\d+)").ok()?;
    re.captures(&message)?.get(1)?.as_str().parse().ok()
}
