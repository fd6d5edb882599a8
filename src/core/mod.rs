//! Core types shared across deptree
//!
//! This module holds the crate-level error handling:
//! - **Strongly-typed errors** ([`DeptreeError`]) for precise handling in code
//! - **User-friendly contexts** ([`ErrorContext`]) with actionable suggestions for CLI users
//! - **Error classification** ([`user_friendly_error`]) that walks an `anyhow` chain
//!
//! Library functions return `anyhow::Result` with context attached at each I/O
//! boundary; the binary converts the final error through [`user_friendly_error`]
//! and prints it with [`ErrorContext::display`].

pub mod error;

pub use error::{DeptreeError, ErrorContext, user_friendly_error};
