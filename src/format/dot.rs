//! Graphviz DOT output.
//!
//! Two layouts are available: one subgraph per cluster with a node per
//! dependency, or one HTML record per cluster with a port per dependency.

use std::fmt;
use std::str::FromStr;

use super::OutputFormat;
use crate::style::{DotStyle, Style, StyleSheet};

/// How clusters are drawn in DOT output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DotLayout {
    /// One subgraph per cluster, one node per dependency.
    #[default]
    Clusters,
    /// One record per cluster, dependencies addressed by port.
    Records,
}

impl DotLayout {
    pub fn template(self) -> &'static str {
        match self {
            Self::Clusters => "dot/dependency-tree.dot.tera",
            Self::Records => "dot/dependency-tree-records.dot.tera",
        }
    }

    pub fn macros(self) -> &'static str {
        match self {
            Self::Clusters => "macros/dot.tera",
            Self::Records => "macros/dot-records.tera",
        }
    }
}

impl fmt::Display for DotLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clusters => f.write_str("clusters"),
            Self::Records => f.write_str("records"),
        }
    }
}

impl FromStr for DotLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clusters" => Ok(Self::Clusters),
            "records" => Ok(Self::Records),
            other => Err(format!("unknown DOT layout '{other}', expected 'clusters' or 'records'")),
        }
    }
}

/// Graphviz output.
#[derive(Debug, Clone, Default)]
pub struct DotFormat {
    style: DotStyle,
    layout: DotLayout,
    template: Option<String>,
}

impl DotFormat {
    pub fn new(style: Style) -> Self {
        Self {
            style: DotStyle::new(style),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: DotLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Render a different template with the layout's macros.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn layout(&self) -> DotLayout {
        self.layout
    }
}

impl OutputFormat for DotFormat {
    fn name(&self) -> &str {
        "dot"
    }

    fn template(&self) -> &str {
        self.template.as_deref().unwrap_or(self.layout.template())
    }

    fn macros(&self) -> Vec<String> {
        vec![self.layout.macros().to_string()]
    }

    fn style_sheet(&self) -> &dyn StyleSheet {
        &self.style
    }

    fn nested(&self) -> bool {
        false
    }
}
