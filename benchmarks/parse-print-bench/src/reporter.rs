//! Benchmark result reporting
//!
//! Renders a [`BenchmarkReport`] as the single JSON line driver scripts
//! consume.

use crate::{error::BenchResult, BenchmarkReport};
use std::io::Write;

/// Benchmark report generator
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    /// Format a report as one line of JSON without a trailing newline
    pub fn format(&self, report: &BenchmarkReport) -> BenchResult<String> {
        Ok(bench_common::json_line(report)?)
    }

    /// Write the report line, newline-terminated, to a writer
    pub fn write_to<W: Write>(&self, writer: &mut W, report: &BenchmarkReport) -> anyhow::Result<()> {
        let line = self.format(report)?;
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PhaseDuration;

    fn make_report() -> BenchmarkReport {
        BenchmarkReport::new(
            PhaseDuration::from_millis(1234),
            &[
                PhaseDuration::from_millis(56),
                PhaseDuration::from_millis(7),
                PhaseDuration::from_millis(56),
            ],
        )
    }

    #[test]
    fn test_format_schema() {
        let output = Reporter::new().format(&make_report()).unwrap();
        assert_eq!(
            output,
            r#"{"build_model":[1234],"print_durations":[56,7,56]}"#
        );
    }

    #[test]
    fn test_format_is_idempotent() {
        let reporter = Reporter::new();
        let report = make_report();
        let first = reporter.format(&report).unwrap();
        let second = reporter.format(&report).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_large_values_not_grouped() {
        let report = BenchmarkReport::new(
            PhaseDuration::from_millis(1_234_567),
            &[PhaseDuration::from_millis(0)],
        );
        let output = Reporter::new().format(&report).unwrap();
        assert_eq!(output, r#"{"build_model":[1234567],"print_durations":[0]}"#);
    }

    #[test]
    fn test_write_to_appends_newline() {
        let mut buffer = Vec::new();
        Reporter::new()
            .write_to(&mut buffer, &make_report())
            .unwrap();

        let written = String::from_utf8(buffer).unwrap();
        assert!(written.ends_with("]}\n"));
        assert_eq!(written.lines().count(), 1);
    }

    #[test]
    fn test_format_round_trips_through_serde() {
        let report = make_report();
        let output = Reporter::new().format(&report).unwrap();
        let parsed: BenchmarkReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, report);
    }
}
