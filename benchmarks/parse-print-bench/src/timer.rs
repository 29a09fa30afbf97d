//! Phase timing
//!
//! Wraps the monotonic clock and turns a unit of work into a millisecond
//! measurement.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Elapsed wall time of one phase, in whole milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhaseDuration(u64);

impl PhaseDuration {
    /// Truncate a std duration to whole milliseconds
    pub fn from_elapsed(elapsed: Duration) -> Self {
        Self(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PhaseDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Measures synchronous units of work against the monotonic clock
#[derive(Debug, Clone, Copy, Default)]
pub struct Timer;

impl Timer {
    pub fn new() -> Self {
        Self
    }

    /// Run `work` to completion and return its output with the elapsed time.
    ///
    /// If `work` fails the error is returned unchanged and no duration is
    /// produced.
    pub fn measure<T, E, F>(&self, work: F) -> Result<(T, PhaseDuration), E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let start = Instant::now();
        let output = work()?;
        let elapsed = PhaseDuration::from_elapsed(start.elapsed());
        Ok((output, elapsed))
    }
}
