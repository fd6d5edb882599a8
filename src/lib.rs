//! deptree - dependency tree rendering
//!
//! Turns an already-resolved dependency tree into Graphviz or JSON text. The
//! tree is replayed as a depth-first stream of visit/leave events; a
//! [`tree::TraversalAccumulator`] rebuilds it, groups dependencies into
//! clusters by dotted namespace, and hands the result to a
//! [`templating::TemplateEngine`] together with a [`style::StyleSheet`].
//!
//! # Architecture Overview
//!
//! ```text
//! DependencyTree --visit/end_visit--> TemplateVisitor --> TraversalAccumulator
//!                                          |                     |
//!                                     OutputFormat         nodes + clusters
//!                                 (template, macros,             |
//!                                  style, nested)                v
//!                                          +----------> TeraTemplateEngine --> sink
//! ```
//!
//! Each root is rendered in its own session: the accumulator, its node and
//! cluster ids, and the engine binding all start fresh, so one failing root never
//! affects the next.
//!
//! # Core Modules
//!
//! - [`models`] - Coordinates, input trees and the visitor protocol
//! - [`tree`] - Tree reconstruction, cluster forest and namespace rules
//! - [`style`] - Scope colors and DOT formatting clauses
//! - [`templating`] - Template engine, resource loader and output directives
//! - [`format`] - DOT and JSON output formats and the template visitor
//! - [`config`] - TOML configuration
//! - [`core`] - Error types and user-facing error reporting
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```rust
//! use deptree_cli::format::{JsonFormat, TemplateVisitor};
//! use deptree_cli::models::{Coordinate, DependencyTree, TreeNode};
//!
//! let tree = DependencyTree::new(vec![
//!     TreeNode::new(Coordinate::new("root", "app", "1.0"))
//!         .with_child(TreeNode::new(Coordinate::new("util.lib", "helper", "2.0"))),
//! ]);
//!
//! let mut visitor = TemplateVisitor::new(Vec::new(), JsonFormat::default());
//! assert_eq!(tree.accept(&mut visitor), vec![true]);
//!
//! let json: serde_json::Value = serde_json::from_slice(&visitor.into_sink()).unwrap();
//! assert_eq!(json["children"][0]["artifactId"], "helper");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod format;
pub mod models;
pub mod style;
pub mod templating;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
