//! Template rendering for dependency trees.
//!
//! The [`TemplateEngine`] trait is the seam between tree reconstruction and
//! text generation: bind a template (by name or inline), macro libraries, a
//! style and arbitrary context values, then evaluate. [`TeraTemplateEngine`]
//! implements it on top of Tera.
//!
//! # Resources
//!
//! Templates are located by a [`ResourceLoader`]: packaged templates first,
//! then resources registered in memory, then the configured search directories.
//! Packaged templates:
//!
//! - `dot/dependency-tree.dot.tera`: Graphviz digraph with nested subgraph clusters
//! - `dot/dependency-tree-records.dot.tera`: Graphviz digraph with one
//!   port-addressed record per cluster
//! - `json/dependency-tree.json.tera`: nested JSON document
//! - `macros/dot.tera`, `macros/dot-records.tera`, `macros/json.tera`: recursive macros
//!
//! Templates named in `{% import %}`, `{% include %}` and `{% extends %}` tags
//! are located the same way, so a missing one is reported as not found.
//!
//! # Template context
//!
//! A rendered session exposes:
//! - `title`: node string of the first root
//! - `roots`: root nodes, each with nested `children`
//! - `dependencies`: every node, flat, in first-visit order
//! - `edges`: every parent to child link
//! - `clusters`: top-level clusters, each with nested `clusters`
//! - `nested`: whether the format wants nested output
//! - `style`: fonts, colors and the format's default clauses
//!
//! # Directives
//!
//! Two filters help with recursive output; see [`directives`]:
//!
//! ```text
//! {% filter indent %}{{ self::node(node=child) }}{% endfilter %}
//! {% filter collapse %}...multi-line markup...{% endfilter %}
//! ```
//!
//! # Output cleanup
//!
//! Evaluated text is trimmed, gets a single trailing line terminator back when
//! it spans several lines, and uses the platform's line terminator throughout.

pub mod directives;
mod engine;
mod error;
mod loader;

pub use engine::{
    DYNAMIC_TEMPLATE_NAME, LINE_ENDING, TemplateEngine, TeraTemplateEngine, cleanup, format_tera_error,
};
pub use error::TemplateError;
pub use loader::{Origin, ResourceEntry, ResourceLoader, TEMPLATE_EXTENSION, packaged_template_names};
