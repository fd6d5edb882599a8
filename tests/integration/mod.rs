//! Integration test suite for deptree
//!
//! End-to-end tests that run the `deptree` binary against tree files, config
//! files and template directories written to a scratch project.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **render_dot**: DOT output in both cluster layouts
//! - **render_json**: Nested JSON output
//! - **templates**: Template discovery and custom templates
//! - **config**: Configuration file handling
//! - **engine**: Template engine contract through the public API
//! - **error_scenarios**: Exit codes and error reporting

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod config;
mod engine;
mod error_scenarios;
mod render_dot;
mod render_json;
mod templates;

/// The three-node scenario tree used across the suite.
const SCENARIO_TREE: &str = deptree_cli::test_utils::fixtures::SCENARIO_TOML;
