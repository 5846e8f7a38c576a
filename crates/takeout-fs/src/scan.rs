//! Directory scanning
//!
//! Each reconciliation phase re-derives its working set from the current
//! on-disk state, so scans are issued fresh at the start of every phase
//! and never cached. Results are sorted by path for deterministic
//! processing order.

use std::path::Path;

use walkdir::WalkDir;

use crate::{Error, FileEntry, Result};

/// Recursively collect every file under `root`.
///
/// Symlinks are not followed. Directories and other non-file entries are
/// skipped. Files whose names are not valid UTF-8 are skipped with a
/// warning; the reconciler cannot reason about names it cannot read.
pub fn walk_tree(root: &Path) -> Result<Vec<FileEntry>> {
    if !root.is_dir() {
        return Err(Error::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| Error::Walk {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        match FileEntry::from_path(entry.path()) {
            Ok(file) => entries.push(file),
            Err(Error::NonUtf8Name { path }) => {
                tracing::warn!(path = %path.display(), "skipping file with non-UTF-8 name");
            }
            Err(e) => return Err(e),
        }
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

/// Collect the files directly inside `dir` (maxdepth 1).
///
/// Used for sidecar-candidate search, which is strictly directory-local.
pub fn list_dir(dir: &Path) -> Result<Vec<FileEntry>> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut entries = Vec::new();
    let read = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    for entry in read {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match FileEntry::from_path(path) {
            Ok(file) => entries.push(file),
            Err(Error::NonUtf8Name { path }) => {
                tracing::warn!(path = %path.display(), "skipping file with non-UTF-8 name");
            }
            Err(e) => return Err(e),
        }
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}
