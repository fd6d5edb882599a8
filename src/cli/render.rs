//! Render a dependency tree file.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use super::{CliConfig, template_dirs};
use crate::core::DeptreeError;
use crate::format::{DotFormat, DotLayout, JsonFormat, OutputFormat, TemplateVisitor};
use crate::models::DependencyTree;
use crate::templating::{TemplateEngine, TemplateError, TeraTemplateEngine};
use crate::tree::NamespaceRules;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Graphviz digraph
    #[default]
    Dot,
    /// Nested JSON document
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// One subgraph per namespace cluster
    #[default]
    Clusters,
    /// One port-addressed record per namespace cluster
    Records,
}

impl From<LayoutArg> for DotLayout {
    fn from(layout: LayoutArg) -> Self {
        match layout {
            LayoutArg::Clusters => Self::Clusters,
            LayoutArg::Records => Self::Records,
        }
    }
}

/// Render every root of a dependency tree file.
#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Dependency tree to render (.toml or .json)
    #[arg(short, long)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormatArg::Dot)]
    format: OutputFormatArg,

    /// Cluster layout for DOT output
    #[arg(long, value_enum, default_value_t = LayoutArg::Clusters)]
    layout: LayoutArg,

    /// Template to render instead of the format's default
    #[arg(short, long)]
    template: Option<String>,

    /// Additional directory to search for templates
    #[arg(long)]
    templates_dir: Option<PathBuf>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderCommand {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let settings = config.load_config()?;
        let tree = DependencyTree::load(&self.input)?;
        let rules = settings.rules().context("Invalid [clustering] rules")?;
        let style = settings.style();
        let engine = TeraTemplateEngine::new(template_dirs(&settings, self.templates_dir.as_deref()));

        let template = self.template.clone().or_else(|| settings.templates.template.clone());
        if let Some(template) = &template {
            if !engine.resource_exists(template) {
                return Err(TemplateError::ResourceNotFound {
                    name: template.clone(),
                }
                .into());
            }
        }

        if tree.roots().is_empty() {
            tracing::warn!("{} contains no roots, nothing to render", self.input.display());
            return Ok(());
        }

        let sink: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path).with_context(|| format!("Failed to create output file: {}", path.display()))?,
            )),
            None => Box::new(std::io::stdout().lock()),
        };

        let rendered = match self.format {
            OutputFormatArg::Dot => {
                let mut format = DotFormat::new(style).with_layout(self.layout.into());
                if let Some(template) = template {
                    format = format.with_template(template);
                }
                render_tree(&tree, sink, format, engine, rules)?
            }
            OutputFormatArg::Json => {
                let mut format = JsonFormat::new(style);
                if let Some(template) = template {
                    format = format.with_template(template);
                }
                render_tree(&tree, sink, format, engine, rules)?
            }
        };

        if let Some(path) = &self.output {
            println!("{} Rendered {} tree(s) to {}", "✓".green(), rendered, path.display());
        }
        Ok(())
    }
}

/// Walk every root through a template visitor. Returns the number of rendered roots.
fn render_tree<W: Write, F: OutputFormat>(
    tree: &DependencyTree,
    sink: W,
    format: F,
    engine: TeraTemplateEngine,
    rules: NamespaceRules,
) -> Result<usize> {
    tracing::debug!("rendering {} root(s) as {}", tree.roots().len(), format.name());
    let mut visitor = TemplateVisitor::with_engine(sink, format, engine).with_rules(rules);
    let results = tree.accept(&mut visitor);

    let failed = results.iter().filter(|rendered| !**rendered).count();
    if failed > 0 {
        return Err(DeptreeError::RenderFailed {
            failed,
            total: results.len(),
        }
        .into());
    }

    Ok(visitor.rendered())
}
