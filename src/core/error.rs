//! Error handling for deptree
//!
//! Two layers, as in the rest of the crate:
//! 1. [`DeptreeError`] - strongly-typed errors for CLI-level failures
//! 2. [`ErrorContext`] - wrapper that adds user-friendly details and suggestions
//!
//! Template failures have their own type, [`crate::templating::TemplateError`],
//! which converts into [`DeptreeError::Template`]. Use [`user_friendly_error`]
//! to turn any `anyhow::Error` into something worth printing.
//!
//! # Examples
//!
//! ```rust,no_run
//! use deptree_cli::core::{DeptreeError, ErrorContext};
//!
//! let context = ErrorContext::new(DeptreeError::InputNotFound { path: "tree.toml".into() })
//!     .with_suggestion("Pass the dependency tree with --input <FILE>");
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::templating::{TemplateError, packaged_template_names};

/// Largest edit distance for which a template name is suggested.
const MAX_SUGGESTION_DISTANCE: usize = 8;

/// The main error type for deptree operations.
#[derive(Error, Debug)]
pub enum DeptreeError {
    /// The dependency tree file does not exist.
    #[error("Dependency tree file not found: {path}")]
    InputNotFound {
        /// Path that was given on the command line
        path: String,
    },

    /// A coordinate string could not be parsed.
    #[error("Invalid coordinate '{coordinate}': {reason}")]
    InvalidCoordinate {
        /// The offending coordinate text
        coordinate: String,
        /// Why it was rejected
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// One or more roots failed to render.
    #[error("Failed to render {failed} of {total} dependency tree(s)")]
    RenderFailed {
        /// Number of roots whose render failed
        failed: usize,
        /// Number of roots walked
        total: usize,
    },

    /// Template lookup, parse or evaluation failure.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Error wrapper with user-facing details and suggestions.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: DeptreeError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: DeptreeError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr: error in red, details in yellow, suggestion in green.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

/// Convert any error into an [`ErrorContext`] with contextual suggestions.
///
/// The error chain is walked so that typed errors wrapped by `anyhow` context
/// are still recognized.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let details = format!("{error:#}");

    for cause in error.chain() {
        if let Some(template_error) = cause.downcast_ref::<TemplateError>() {
            return template_error_context(template_error, &details);
        }

        if let Some(deptree_error) = cause.downcast_ref::<DeptreeError>() {
            return deptree_error_context(deptree_error, &details);
        }

        if let Some(toml_error) = cause.downcast_ref::<toml::de::Error>() {
            return ErrorContext::new(DeptreeError::ConfigError {
                message: toml_error.message().to_string(),
            })
            .with_details(details)
            .with_suggestion("Check the TOML syntax. Verify quotes, brackets, and table names");
        }
    }

    ErrorContext::new(DeptreeError::ConfigError {
        message: error.to_string(),
    })
    .with_details(details)
}

fn deptree_error_context(error: &DeptreeError, details: &str) -> ErrorContext {
    match error {
        DeptreeError::InputNotFound { path } => {
            ErrorContext::new(DeptreeError::InputNotFound { path: path.clone() })
                .with_suggestion("Check the path given to --input; both .toml and .json trees are accepted")
        }
        DeptreeError::InvalidCoordinate { coordinate, reason } => {
            ErrorContext::new(DeptreeError::InvalidCoordinate {
                coordinate: coordinate.clone(),
                reason: reason.clone(),
            })
            .with_details(details.to_string())
            .with_suggestion("Coordinates use the form group:artifact[:type[:classifier]]:version")
        }
        DeptreeError::RenderFailed { failed, total } => {
            ErrorContext::new(DeptreeError::RenderFailed {
                failed: *failed,
                total: *total,
            })
            .with_suggestion("Re-run with --verbose to see the template error for each failed tree")
        }
        DeptreeError::Template(template_error) => template_error_context(template_error, details),
        DeptreeError::ConfigError { message } => {
            ErrorContext::new(DeptreeError::ConfigError { message: message.clone() })
                .with_details(details.to_string())
        }
    }
}

fn template_error_context(error: &TemplateError, details: &str) -> ErrorContext {
    let context = ErrorContext::new(DeptreeError::Template(error.clone())).with_details(details.to_string());

    match error {
        TemplateError::ResourceNotFound { name } => match closest_template_name(name) {
            Some(candidate) => context.with_suggestion(format!("Did you mean '{candidate}'?")),
            None => context.with_suggestion(
                "Run 'deptree templates' to list the available templates, or add a directory with --templates-dir",
            ),
        },
        TemplateError::NoTemplateSpecified => {
            context.with_suggestion("Bind a template name or an inline template before evaluating")
        }
        TemplateError::ParseError { .. } => context.with_suggestion(
            "Check template syntax for unclosed {{ }} or {% %} delimiters and misspelled filters",
        ),
        _ => context,
    }
}

/// Closest packaged template name by Levenshtein distance.
fn closest_template_name(name: &str) -> Option<&'static str> {
    packaged_template_names()
        .map(|candidate| (candidate, strsim::levenshtein(name, candidate)))
        .filter(|(_, distance)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}
