//! Parse/Print Benchmark Harness
//!
//! Times how long a code-model front-end takes to build an in-memory model of
//! a source tree, and how long it takes to pretty-print every compilation unit
//! of that model back to text.
//!
//! ## Phases
//!
//! - **Build**: the backend discovers and parses every source file, once
//! - **Print**: every compilation unit is printed once, repeated per the
//!   configured repetition count
//!
//! Phases run strictly one after another on the calling thread.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use parse_print_bench::{BenchmarkRunner, Reporter, RunnerConfig, RustSourceBackend};
//!
//! let runner = BenchmarkRunner::new(RustSourceBackend::new(), RunnerConfig::default())?;
//! let report = runner.run(Path::new("src"))?;
//! println!("{}", Reporter::new().format(&report)?);
//! ```

pub mod backend;
pub mod error;
pub mod measurement;
pub mod report;
pub mod reporter;
pub mod runner;
pub mod timer;

// Re-export important items
pub use backend::{ModelBackend, RustSourceBackend, UnparsablePolicy};
pub use error::{BenchError, BenchResult};
pub use measurement::{Interpretation, Measurement, MeasurementSet};
pub use report::BenchmarkReport;
pub use reporter::Reporter;
pub use runner::{BenchmarkRunner, RunnerConfig, RunnerState, MAX_REPETITIONS};
pub use timer::{PhaseDuration, Timer};
