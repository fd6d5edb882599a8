//! Test utilities for deptree
//!
//! Available to unit tests and, through the `test-utils` feature, to the
//! integration suite:
//! - [`init_test_logging`] - one-time tracing setup routed through the test writer
//! - [`fixtures`] - ready-made coordinates and dependency trees
//!
//! # Example
//!
//! ```rust,no_run
//! use deptree_cli::test_utils::{fixtures, init_test_logging};
//!
//! init_test_logging(None);
//! let tree = fixtures::scenario_tree();
//! assert_eq!(tree.roots().len(), 1);
//! ```

pub mod fixtures;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. With `None`, logging is enabled only
/// when `RUST_LOG` is set:
///
/// ```bash
/// RUST_LOG=deptree_cli=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
