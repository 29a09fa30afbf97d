//! Benchmark report
//!
//! The finalized result of one run: the model build time and one print time
//! per repetition.

use crate::timer::PhaseDuration;
use serde::{Deserialize, Serialize};

/// Durations collected by one benchmark run
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Model build time, always a single entry
    build_model: Vec<u64>,
    /// Print time per repetition, in execution order
    print_durations: Vec<u64>,
}

impl BenchmarkReport {
    pub fn new(build: PhaseDuration, prints: &[PhaseDuration]) -> Self {
        Self {
            build_model: vec![build.as_millis()],
            print_durations: prints.iter().map(PhaseDuration::as_millis).collect(),
        }
    }

    pub fn build_model(&self) -> &[u64] {
        &self.build_model
    }

    pub fn print_durations(&self) -> &[u64] {
        &self.print_durations
    }

    /// Total of all print repetitions in milliseconds
    pub fn total_print_ms(&self) -> u64 {
        self.print_durations.iter().sum()
    }
}
