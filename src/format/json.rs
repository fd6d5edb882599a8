//! Nested JSON document output, one document per root.

use super::OutputFormat;
use crate::style::{Style, StyleSheet};

pub const JSON_TEMPLATE: &str = "json/dependency-tree.json.tera";
pub const JSON_MACROS: &str = "macros/json.tera";

/// Nested JSON document output.
#[derive(Debug, Clone, Default)]
pub struct JsonFormat {
    style: Style,
    template: Option<String>,
}

impl JsonFormat {
    pub fn new(style: Style) -> Self {
        Self { style, template: None }
    }

    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }
}

impl OutputFormat for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn template(&self) -> &str {
        self.template.as_deref().unwrap_or(JSON_TEMPLATE)
    }

    fn macros(&self) -> Vec<String> {
        vec![JSON_MACROS.to_string()]
    }

    fn style_sheet(&self) -> &dyn StyleSheet {
        &self.style
    }

    fn nested(&self) -> bool {
        true
    }
}
