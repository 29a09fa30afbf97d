//! Output helpers for harness results
//!
//! Driver scripts pick the result out of the process output by looking for a
//! line that starts with `{"`, so results are always written compactly on a
//! single line.

use serde::Serialize;

/// Serialize any value as a single compact JSON line
///
/// The returned string never contains a newline and has no trailing newline;
/// callers append one when writing to a stream.
///
/// # Example
///
/// ```rust,ignore
/// use bench_common::json_line;
///
/// #[derive(Serialize)]
/// struct Timings { build: Vec<u64> }
///
/// let line = json_line(&Timings { build: vec![12] })?;
/// assert_eq!(line, r#"{"build":[12]}"#);
/// ```
pub fn json_line<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(data)
}
