//! Rust source tree backend
//!
//! Models a directory of `.rs` files with `syn` and pretty-prints them back
//! with `prettyplease`. Files are discovered with `walkdir` and enumerated in
//! file-name order so repeated runs over the same tree see the same unit
//! sequence. Symlinks are followed.

use super::ModelBackend;
use crate::error::{BenchError, BenchResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const SOURCE_EXTENSION: &str = "rs";

/// What to do with a source file that fails to parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnparsablePolicy {
    /// Abort the model build
    #[default]
    Fail,
    /// Log a warning and leave the file out of the model
    Skip,
}

/// One parsed Rust source file
#[derive(Debug, Clone)]
pub struct SourceUnit {
    path: PathBuf,
    ast: syn::File,
}

impl SourceUnit {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ast(&self) -> &syn::File {
        &self.ast
    }
}

/// Parsed model of a Rust source tree
#[derive(Debug, Clone, Default)]
pub struct SourceModel {
    root: PathBuf,
    units: Vec<SourceUnit>,
    skipped: Vec<PathBuf>,
}

impl SourceModel {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn units(&self) -> &[SourceUnit] {
        &self.units
    }

    /// Files left out under [`UnparsablePolicy::Skip`]
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }
}

/// Backend for Rust source trees built on `syn`
#[derive(Debug, Clone, Default)]
pub struct RustSourceBackend {
    policy: UnparsablePolicy,
}

impl RustSourceBackend {
    /// Create a backend that fails on the first unparsable file
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: UnparsablePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnparsablePolicy {
        self.policy
    }

    /// Collect all source file paths under `root`.
    ///
    /// A file root yields just that file. Walk errors (unreadable entries,
    /// symlink loops) abort the build.
    fn collect_source_files(&self, root: &Path) -> BenchResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| BenchError::model_build(root, e))?;
            let path = entry.path();
            if entry.file_type().is_file()
                && path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
            {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    fn parse_source_file(path: &Path) -> Result<syn::File, String> {
        let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        syn::parse_file(&content).map_err(|e| e.to_string())
    }
}

impl ModelBackend for RustSourceBackend {
    type Model = SourceModel;
    type Unit = SourceUnit;

    fn build_model(&self, root: &Path) -> BenchResult<SourceModel> {
        std::fs::metadata(root).map_err(|e| BenchError::model_build(root, e))?;

        let files = self.collect_source_files(root)?;
        tracing::debug!(root = %root.display(), files = files.len(), "Discovered source files");

        let mut model = SourceModel {
            root: root.to_path_buf(),
            units: Vec::with_capacity(files.len()),
            skipped: Vec::new(),
        };

        for path in files {
            match Self::parse_source_file(&path) {
                Ok(ast) => {
                    tracing::debug!(file = %path.display(), items = ast.items.len(), "Parsed");
                    model.units.push(SourceUnit { path, ast });
                }
                Err(reason) => match self.policy {
                    UnparsablePolicy::Fail => {
                        return Err(BenchError::model_build(path, reason));
                    }
                    UnparsablePolicy::Skip => {
                        tracing::warn!(file = %path.display(), error = %reason, "Skipping unparsable file");
                        model.skipped.push(path);
                    }
                },
            }
        }

        if model.units.is_empty() {
            if !model.skipped.is_empty() {
                return Err(BenchError::model_build(
                    root,
                    format!(
                        "none of the {} source files could be parsed",
                        model.skipped.len()
                    ),
                ));
            }
            tracing::warn!(root = %root.display(), "No source files found, model is empty");
        }

        Ok(model)
    }

    fn compilation_units<'m>(&self, model: &'m SourceModel) -> &'m [SourceUnit] {
        model.units()
    }

    fn print(&self, unit: &SourceUnit) -> BenchResult<String> {
        Ok(prettyplease::unparse(&unit.ast))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn file_names(model: &SourceModel) -> Vec<String> {
        model
            .units()
            .iter()
            .map(|u| u.path().file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_build_model_discovers_nested_sources() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b.rs", "fn b() {}");
        write(dir.path(), "a.rs", "fn a() {}");
        write(dir.path(), "nested/c.rs", "struct C;");
        write(dir.path(), "README.md", "# not rust");

        let backend = RustSourceBackend::new();
        let model = backend.build_model(dir.path()).unwrap();

        assert_eq!(file_names(&model), vec!["a.rs", "b.rs", "c.rs"]);
        assert_eq!(backend.compilation_units(&model).len(), 3);
        assert!(model.skipped().is_empty());
        assert_eq!(model.root(), dir.path());
    }

    #[test]
    fn test_build_model_accepts_file_root() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "lib.rs", "pub mod x;");

        let model = RustSourceBackend::new()
            .build_model(&dir.path().join("lib.rs"))
            .unwrap();

        assert_eq!(file_names(&model), vec!["lib.rs"]);
    }

    #[test]
    fn test_build_model_missing_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = RustSourceBackend::new().build_model(&missing).unwrap_err();

        match err {
            BenchError::ModelBuild { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_build_model_fails_on_unparsable_by_default() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "good.rs", "fn good() {}");
        write(dir.path(), "broken.rs", "fn broken( {");

        let err = RustSourceBackend::new()
            .build_model(dir.path())
            .unwrap_err();

        match err {
            BenchError::ModelBuild { path, reason } => {
                assert!(path.ends_with("broken.rs"));
                assert!(!reason.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_build_model_skips_unparsable_when_configured() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "good.rs", "fn good() {}");
        write(dir.path(), "broken.rs", "fn broken( {");

        let backend = RustSourceBackend::with_policy(UnparsablePolicy::Skip);
        let model = backend.build_model(dir.path()).unwrap();

        assert_eq!(file_names(&model), vec!["good.rs"]);
        assert_eq!(model.skipped().len(), 1);
        assert!(model.skipped()[0].ends_with("broken.rs"));
    }

    #[test]
    fn test_build_model_rejects_all_unparsable_even_when_skipping() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "broken.rs", "impl {");

        let err = RustSourceBackend::with_policy(UnparsablePolicy::Skip)
            .build_model(dir.path())
            .unwrap_err();

        assert!(matches!(err, BenchError::ModelBuild { .. }));
        assert!(err.to_string().contains("none of the 1 source files"));
    }

    #[test]
    fn test_build_model_empty_directory() {
        let dir = TempDir::new().unwrap();

        let model = RustSourceBackend::new().build_model(dir.path()).unwrap();

        assert!(model.units().is_empty());
    }

    #[test]
    fn test_print_renders_tokens() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "lib.rs",
            "pub fn answer() -> u32 {\n    // comment\n    42\n}\n",
        );

        let backend = RustSourceBackend::new();
        let model = backend.build_model(dir.path()).unwrap();
        let text = backend.print(&backend.compilation_units(&model)[0]).unwrap();

        assert_eq!(text, "pub fn answer() -> u32 {\n    42\n}\n");
    }

    #[test]
    fn test_print_formats_collapsed_source() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "lib.rs", "struct P{x:i32,y:i32}fn f(p:P)->i32{p.x+p.y}");

        let backend = RustSourceBackend::new();
        let model = backend.build_model(dir.path()).unwrap();
        let text = backend.print(&backend.compilation_units(&model)[0]).unwrap();

        assert!(text.contains("struct P {\n    x: i32,\n    y: i32,\n}"), "{text}");
        assert!(text.contains("fn f(p: P) -> i32 {"), "{text}");
    }

    #[cfg(unix)]
    #[test]
    fn test_build_model_follows_symlinked_sources() {
        let dir = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        write(outside.path(), "shared.rs", "pub fn shared() {}");
        write(dir.path(), "a.rs", "fn a() {}");
        std::os::unix::fs::symlink(outside.path().join("shared.rs"), dir.path().join("linked.rs"))
            .unwrap();
        std::os::unix::fs::symlink(outside.path(), dir.path().join("vendor")).unwrap();

        let model = RustSourceBackend::new().build_model(dir.path()).unwrap();

        assert_eq!(file_names(&model), vec!["a.rs", "linked.rs", "shared.rs"]);
    }

    #[test]
    fn test_default_policy() {
        assert_eq!(RustSourceBackend::new().policy(), UnparsablePolicy::Fail);
    }
}
