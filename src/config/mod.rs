//! Configuration for deptree
//!
//! All settings are optional and live in a single TOML file passed with
//! `--config`. Missing sections and keys fall back to the built-in defaults.
//!
//! ```toml
//! [style]
//! font_name = "Courier"
//! font_size = 10
//! color = "black"
//! background_color = "white"
//! fallback_color = "red"
//!
//! [style.scope_colors]
//! test = "green"
//!
//! [templates]
//! search_path = ["templates"]          # relative to this file
//! template = "custom/tree.dot.tera"    # replaces the format's template
//!
//! [clustering]
//! min_segments = 2
//!
//! [[clustering.rules]]
//! pattern = "commons-*"
//! parent = "org.apache.commons"
//! match_artifact = true
//! ```
//!
//! A `rules` table replaces the built-in rules entirely, so repeat any built-in
//! rule that should stay in effect.

mod parser;

pub use parser::parse_config;

use anyhow::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::style::Style;
use crate::templating::ResourceLoader;
use crate::tree::{DEFAULT_MIN_SEGMENTS, NamespaceRule, NamespaceRules, default_rules};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeptreeConfig {
    pub style: StyleConfig,
    pub templates: TemplatesConfig,
    pub clustering: ClusteringConfig,
}

/// Overrides applied on top of [`Style::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub font_name: Option<String>,
    pub font_size: Option<u32>,
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub fallback_color: Option<String>,
    pub scope_colors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Extra template directories, searched after the packaged templates.
    pub search_path: Vec<PathBuf>,
    /// Template rendered instead of the format's default.
    pub template: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    pub min_segments: Option<usize>,
    pub rules: Option<Vec<NamespaceRule>>,
}

impl DeptreeConfig {
    /// Load a configuration file. Relative search directories are resolved
    /// against the file's own directory.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config: Self = parse_config(path)?;

        if let Some(base) = path.parent() {
            for dir in &mut config.templates.search_path {
                if dir.is_relative() {
                    *dir = base.join(&*dir);
                }
            }
        }

        tracing::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn style(&self) -> Style {
        self.style.apply(Style::default())
    }

    pub fn rules(&self) -> Result<NamespaceRules> {
        let rules = self.clustering.rules.clone().unwrap_or_else(default_rules);
        NamespaceRules::new(rules, self.clustering.min_segments.unwrap_or(DEFAULT_MIN_SEGMENTS))
    }

    /// A loader over the configured search path plus `extra` directories.
    pub fn loader(&self, extra: &[PathBuf]) -> ResourceLoader {
        let mut loader = ResourceLoader::new();
        for dir in self.templates.search_path.iter().chain(extra) {
            loader.add_search_dir(dir.clone());
        }
        loader
    }
}

impl StyleConfig {
    pub fn apply(&self, mut style: Style) -> Style {
        if let Some(font_name) = &self.font_name {
            style = style.with_font_name(font_name.clone());
        }
        if let Some(font_size) = self.font_size {
            style = style.with_font_size(font_size);
        }
        if let Some(color) = &self.color {
            style = style.with_color(color.clone());
        }
        if let Some(background_color) = &self.background_color {
            style = style.with_background_color(background_color.clone());
        }
        if let Some(fallback_color) = &self.fallback_color {
            style = style.with_fallback_color(fallback_color.clone());
        }
        for (scope, color) in &self.scope_colors {
            style = style.with_scope_color(scope.clone(), color.clone());
        }
        style
    }
}
