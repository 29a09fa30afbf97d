//! Named measurements across runs
//!
//! Benchmark drivers run the harness several times and merge every report
//! into one record per measurement name, tagged with its unit and with
//! whether lower or higher values are better.

use crate::BenchmarkReport;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a measurement's values should be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Interpretation {
    LessIsBetter,
    MoreIsBetter,
    Neutral,
}

/// All collected values for one measurement name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub unit: String,
    pub interpretation: Interpretation,
    pub values: Vec<f64>,
}

impl Measurement {
    /// Empty millisecond timing, lower is better
    pub fn millis() -> Self {
        Self {
            unit: "ms".to_string(),
            interpretation: Interpretation::LessIsBetter,
            values: Vec::new(),
        }
    }
}

/// Measurements merged from any number of runs, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeasurementSet {
    measurements: BTreeMap<String, Measurement>,
}

impl MeasurementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one run's durations, keeping run order within each name
    pub fn accumulate(&mut self, report: &BenchmarkReport) {
        self.extend_millis("build_model", report.build_model());
        self.extend_millis("print_durations", report.print_durations());
    }

    pub fn get(&self, name: &str) -> Option<&Measurement> {
        self.measurements.get(name)
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Render as `{name: {measurement: {unit, interpretation, values}}}`
    pub fn to_benchmark_json(&self, name: &str) -> Result<serde_json::Value, serde_json::Error> {
        let mut benchmark = serde_json::Map::new();
        benchmark.insert(name.to_string(), serde_json::to_value(self)?);
        Ok(serde_json::Value::Object(benchmark))
    }

    fn extend_millis(&mut self, name: &str, values: &[u64]) {
        let entry = self
            .measurements
            .entry(name.to_string())
            .or_insert_with(Measurement::millis);
        // Millisecond counts stay far below 2^53, so the conversion is exact.
        entry.values.extend(values.iter().map(|&v| v as f64));
    }
}
