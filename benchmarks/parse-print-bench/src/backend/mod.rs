//! Model backends
//!
//! A backend is the external front-end being benchmarked: it turns a source
//! tree into an in-memory model and renders each compilation unit back to
//! text. The harness only times these calls; it never looks inside a unit.

pub mod rust_source;

use crate::error::BenchResult;
use std::path::Path;

pub use rust_source::{RustSourceBackend, SourceUnit, UnparsablePolicy};

/// A code-model front-end that can build a model and pretty-print it
///
/// Implementations are owned by a single runner and called sequentially from
/// one thread.
pub trait ModelBackend {
    /// In-memory model built from a source tree
    type Model;
    /// One parsed source file inside a [`Self::Model`]
    type Unit;

    /// Discover, parse and model every source file under `root`.
    ///
    /// Fails with [`crate::BenchError::ModelBuild`] when the path is missing or
    /// unreadable, or when its contents cannot be parsed under the backend's
    /// policy.
    fn build_model(&self, root: &Path) -> BenchResult<Self::Model>;

    /// Compilation units of `model`, in the backend's enumeration order
    fn compilation_units<'m>(&self, model: &'m Self::Model) -> &'m [Self::Unit];

    /// Serialize a single unit back to source text
    fn print(&self, unit: &Self::Unit) -> BenchResult<String>;
}
