//! Error types for the parse/print harness

use std::path::PathBuf;

/// Error type for harness operations
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The backend could not construct a model from the given path
    #[error("failed to build model from {}: {reason}", .path.display())]
    ModelBuild { path: PathBuf, reason: String },

    /// A compilation unit could not be serialized back to text
    #[error("failed to print compilation unit {unit}: {reason}")]
    Print { unit: String, reason: String },

    /// A phase was requested in a state that does not allow it
    #[error("cannot {operation} while runner is {state}")]
    InvalidState {
        state: crate::runner::RunnerState,
        operation: &'static str,
    },

    /// Rejected configuration value
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Report serialization failed
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl BenchError {
    /// Create a model build error for a path
    pub fn model_build(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ModelBuild {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a print error for a named unit
    pub fn print(unit: impl Into<String>, reason: impl ToString) -> Self {
        Self::Print {
            unit: unit.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for harness operations
pub type BenchResult<T> = Result<T, BenchError>;
