//! [`ExportTree`] fixture for reconciliation test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory laid out like a bulk-archive export.
///
/// # Example
///
/// ```rust,no_run
/// use takeout_test_utils::ExportTree;
///
/// let tree = ExportTree::new();
/// tree.content("album/photo.jpg");
/// tree.sidecar("album/photo.jpg.supplemental-meta.json");
/// assert!(tree.exists("album/photo.jpg"));
/// ```
pub struct ExportTree {
    temp_dir: TempDir,
}

impl Default for ExportTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportTree {
    /// Create an empty temporary export directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root path of the export directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file at `rel` with the given contents, creating parent
    /// directories as needed.
    pub fn file(&self, rel: &str, contents: &[u8]) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Write a placeholder content file (photo, video, ...).
    pub fn content(&self, rel: &str) -> PathBuf {
        self.file(rel, b"binary-content")
    }

    /// Write a minimal JSON sidecar.
    pub fn sidecar(&self, rel: &str) -> PathBuf {
        self.file(rel, br#"{"title": "fixture"}"#)
    }

    /// Whether a file exists at `rel`.
    pub fn exists(&self, rel: &str) -> bool {
        self.root().join(rel).exists()
    }

    /// Every file path under the root, relative and sorted.
    ///
    /// Useful for asserting a run changed nothing (dry-run purity) or
    /// comparing before/after snapshots.
    pub fn snapshot(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        collect_files(self.root(), self.root(), &mut paths);
        paths.sort();
        paths
    }
}

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        if path.is_dir() {
            collect_files(root, &path, out);
        } else {
            out.push(path.strip_prefix(root).unwrap().to_path_buf());
        }
    }
}
