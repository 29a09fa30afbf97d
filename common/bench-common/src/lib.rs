//! Bench Common - Shared utilities for benchmark harnesses
//!
//! This crate provides the process-level plumbing every harness binary needs:
//!
//! - **Initialization**: [`init_tracing`] for logging to stderr
//! - **Output**: [`json_line`] for emitting a result record as a single line
//!
//! Harnesses write their measurements to stdout, so everything else
//! (logs, warnings, usage) goes to stderr.
//!
//! # Example
//!
//! ```rust,ignore
//! use bench_common::{init_tracing, json_line};
//!
//! init_tracing("my_bench")?;
//! println!("{}", json_line(&report)?);
//! ```

pub mod init;
pub mod output;

// Re-export commonly used items at crate root
pub use init::{init_tracing, LogFormat};
pub use output::json_line;
