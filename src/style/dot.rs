//! Graphviz attribute clauses.

use super::{Style, StyleDefaults, StyleSheet};
use crate::models::Coordinate;

/// Style sheet for DOT output.
///
/// Nodes and edges only receive a color clause when their scope color differs
/// from the default color. Optional dependencies are drawn dashed (nodes) and
/// dotted (edges).
#[derive(Debug, Clone, Default)]
pub struct DotStyle {
    style: Style,
}

impl DotStyle {
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    fn color_clause(&self, coordinate: &Coordinate) -> Option<String> {
        let color = self.style.color_for(coordinate);
        (color != self.style.color()).then(|| format!("color = \"{color}\", fontcolor = \"{color}\""))
    }

    fn font_clause(&self, color: &str, font_size: u32) -> String {
        format!(
            "color = \"{color}\"; fontcolor = \"{color}\"; fontname = \"{}\"; fontsize = {font_size}",
            self.style.font_name()
        )
    }
}

impl StyleSheet for DotStyle {
    fn base(&self) -> &Style {
        &self.style
    }

    fn node_format(&self, coordinate: &Coordinate) -> String {
        let mut clauses: Vec<String> = self.color_clause(coordinate).into_iter().collect();
        if coordinate.is_optional() {
            clauses.push("style = \"dashed\"".to_string());
        }
        clauses.join(", ")
    }

    fn edge_format(&self, child: &Coordinate) -> String {
        let mut clauses: Vec<String> = self.color_clause(child).into_iter().collect();
        if child.is_optional() {
            clauses.push("style = \"dotted\"".to_string());
        }
        clauses.join(", ")
    }

    fn defaults(&self) -> StyleDefaults {
        let color = self.style.color();
        let size = self.style.font_size();
        StyleDefaults {
            graph: self.font_clause(color, size + 2),
            node: format!(
                "{}; style = \"filled\"; fillcolor = \"{}\"",
                self.font_clause(color, size),
                self.style.background_color()
            ),
            edge: format!("{}; style = \"solid\"", self.font_clause(color, size)),
        }
    }
}
