//! Rendering styles.
//!
//! A [`Style`] is a plain value: fonts, default colors and the scope to color
//! table. It is threaded into every render explicitly, so two renders with
//! different styles never interfere.
//!
//! Output formats need more than raw values; the DOT format, for instance, wants
//! ready-made attribute clauses per node and edge. Those are produced by a
//! [`StyleSheet`], which wraps a base [`Style`]. The base style is itself a
//! style sheet that emits no clauses at all, which is what the JSON format uses.

mod dot;

pub use dot::DotStyle;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Coordinate, DEFAULT_PACKAGING};

pub const DEFAULT_FONT_NAME: &str = "Helvetica,Arial,sans-serif";
pub const DEFAULT_FONT_SIZE: u32 = 9;
pub const DEFAULT_COLOR: &str = "black";
pub const DEFAULT_BACKGROUND_COLOR: &str = "white";
/// Color for scopes missing from the scope table.
pub const FALLBACK_COLOR: &str = "red";

fn default_scope_colors() -> BTreeMap<String, String> {
    [
        ("compile", "black"),
        ("test", "darkgreen"),
        ("provided", "blue"),
        ("system", "blue"),
        ("runtime", "blue"),
        ("import", "orange"),
    ]
    .into_iter()
    .map(|(scope, color)| (scope.to_string(), color.to_string()))
    .collect()
}

/// Fonts, default colors and scope colors for one render.
///
/// # Examples
///
/// ```rust
/// use deptree_cli::style::Style;
///
/// let style = Style::default().with_font_size(12);
/// assert_eq!(style.scope_color(Some("test")), "darkgreen");
/// assert_eq!(style.scope_color(Some("weird")), "red");
/// assert_eq!(style.font_size(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    font_name: String,
    font_size: u32,
    color: String,
    background_color: String,
    scope_colors: BTreeMap<String, String>,
    fallback_color: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font_name: DEFAULT_FONT_NAME.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            color: DEFAULT_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            scope_colors: default_scope_colors(),
            fallback_color: FALLBACK_COLOR.to_string(),
        }
    }
}

impl Style {
    #[must_use]
    pub fn with_font_name(mut self, font_name: impl Into<String>) -> Self {
        self.font_name = font_name.into();
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, background_color: impl Into<String>) -> Self {
        self.background_color = background_color.into();
        self
    }

    /// Override (or add) the color of one scope.
    #[must_use]
    pub fn with_scope_color(mut self, scope: impl Into<String>, color: impl Into<String>) -> Self {
        self.scope_colors.insert(scope.into(), color.into());
        self
    }

    #[must_use]
    pub fn with_fallback_color(mut self, color: impl Into<String>) -> Self {
        self.fallback_color = color.into();
        self
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Default foreground color. Nodes in this color get no explicit clause.
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    pub fn scope_colors(&self) -> &BTreeMap<String, String> {
        &self.scope_colors
    }

    /// Color of a scope. Unknown and missing scopes resolve to the fallback color.
    pub fn scope_color(&self, scope: Option<&str>) -> &str {
        scope
            .and_then(|scope| self.scope_colors.get(scope))
            .map_or(self.fallback_color.as_str(), String::as_str)
    }

    /// Color of a node, derived from its scope.
    pub fn color_for(&self, coordinate: &Coordinate) -> &str {
        self.scope_color(coordinate.scope())
    }
}

/// Graph-wide default clauses emitted once at the top of an output document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleDefaults {
    pub graph: String,
    pub node: String,
    pub edge: String,
}

/// Formatting rules an output format derives from a [`Style`].
pub trait StyleSheet {
    /// The plain style values.
    fn base(&self) -> &Style;

    /// Attribute clause for a node, empty when nothing differs from the defaults.
    fn node_format(&self, _coordinate: &Coordinate) -> String {
        String::new()
    }

    /// Attribute clause for the edge leading to `child`.
    fn edge_format(&self, _child: &Coordinate) -> String {
        String::new()
    }

    /// Whether the packaging type is worth printing for this node.
    fn show_type(&self, coordinate: &Coordinate) -> bool {
        coordinate.packaging() != DEFAULT_PACKAGING
    }

    fn defaults(&self) -> StyleDefaults {
        StyleDefaults::default()
    }
}

impl StyleSheet for Style {
    fn base(&self) -> &Style {
        self
    }
}

/// Everything about a style that templates can read, as one serializable value.
#[derive(Debug, Clone, Serialize)]
pub struct StyleView {
    pub font_name: String,
    pub font_size: u32,
    pub color: String,
    pub background_color: String,
    pub scope_colors: BTreeMap<String, String>,
    pub defaults: StyleDefaults,
}

impl StyleView {
    pub fn new(sheet: &dyn StyleSheet) -> Self {
        let base = sheet.base();
        Self {
            font_name: base.font_name.clone(),
            font_size: base.font_size,
            color: base.color.clone(),
            background_color: base.background_color.clone(),
            scope_colors: base.scope_colors.clone(),
            defaults: sheet.defaults(),
        }
    }
}
