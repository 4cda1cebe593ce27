//! [`TestRunfiles`] builder for runfiles test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding manifests, runfiles trees and program
/// stand-ins for discovery tests.
///
/// # Example
///
/// ```rust,no_run
/// use runfiles_test_utils::TestRunfiles;
///
/// let fixture = TestRunfiles::new();
/// let data = fixture.write_file("data/input.txt", "hi!");
/// let manifest = fixture.write_manifest(&[
///     ("repo/input.txt", data.to_str().unwrap()),
///     ("repo/__init__.py", ""),
/// ]);
/// assert!(manifest.is_file());
/// ```
pub struct TestRunfiles {
    temp_dir: TempDir,
}

impl Default for TestRunfiles {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRunfiles {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `path` (relative to root), creating parents.
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", full_path.display()));
        full_path
    }

    /// Create directory `path` (relative to root) and its parents.
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root().join(path);
        fs::create_dir_all(&full_path).unwrap();
        full_path
    }

    /// Write a manifest named `MANIFEST` at the root.
    ///
    /// Each entry becomes one `<logical> <physical>` line. An empty physical
    /// path produces an empty-runfile line (`<logical> `).
    pub fn write_manifest(&self, entries: &[(&str, &str)]) -> PathBuf {
        self.write_manifest_at("MANIFEST", entries)
    }

    /// Write a manifest at `path` (relative to root).
    pub fn write_manifest_at(&self, path: &str, entries: &[(&str, &str)]) -> PathBuf {
        let content: String = entries
            .iter()
            .map(|(logical, physical)| format!("{logical} {physical}\n"))
            .collect();
        self.write_file(path, &content)
    }

    /// Create a runfiles directory tree at `path` holding `files`.
    ///
    /// `files` are `(logical path, content)` pairs written below the tree.
    pub fn write_tree(&self, path: &str, files: &[(&str, &str)]) -> PathBuf {
        let tree = self.create_dir(path);
        for (logical, content) in files {
            self.write_file(&format!("{path}/{logical}"), content);
        }
        tree
    }

    /// Assert that the file at `path` has exactly `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or differs from `content`.
    pub fn assert_file_eq(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.root().join(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert_eq!(
            file_content,
            content,
            "File {} has unexpected content",
            full_path.display()
        );
    }
}
