//! Template errors.
//!
//! Every variant is terminal for one evaluation only. The engine drops its
//! binding before reporting, so the next evaluation starts clean.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Neither a template name nor an inline template was bound.
    #[error("No template was specified")]
    NoTemplateSpecified,

    /// A template or macro library could not be located.
    #[error("Unable to find resource '{name}'")]
    ResourceNotFound { name: String },

    /// Template syntax is invalid.
    #[error("Failed to parse template '{name}'{}: {message}", line_suffix(.line))]
    ParseError {
        name: String,
        line: Option<usize>,
        message: String,
    },

    /// Evaluation failed, e.g. on an undefined variable or a failing filter.
    #[error("Failed to render template '{name}': {message}")]
    RenderFailed { name: String, message: String },

    /// A value could not be bound into the render context.
    #[error("Failed to bind '{key}' into the template context: {message}")]
    Context { key: String, message: String },

    /// A filesystem resource exists but could not be read.
    #[error("Failed to read template '{name}' from {}: {message}", .path.display())]
    Io {
        name: String,
        path: PathBuf,
        message: String,
    },
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|line| format!(" at line {line}")).unwrap_or_default()
}
