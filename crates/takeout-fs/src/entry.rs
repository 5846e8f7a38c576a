//! File-entry model for the export tree
//!
//! Every file the reconciler touches is represented as a [`FileEntry`]:
//! an absolute path split into its directory and filename components,
//! classified as either a JSON metadata sidecar or a content file.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Classification of a file within an export tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// JSON metadata sidecar describing exactly one content file.
    Sidecar,
    /// Primary exported file (photo, video, ...).
    Content,
}

/// A single file in the export tree.
///
/// Filenames are kept as owned strings so the name-repair functions can
/// operate on them without re-decoding the path on every probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path to the file.
    pub path: PathBuf,
    /// Directory the file lives in.
    pub dir: PathBuf,
    /// Filename component.
    pub name: String,
}

impl FileEntry {
    /// Build an entry from a file path.
    ///
    /// Fails if the filename is not valid UTF-8; the reconciler only
    /// reasons about names it can inspect as strings.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::NonUtf8Name { path: path.clone() })?
            .to_string();
        let dir = path.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
        Ok(Self { path, dir, name })
    }

    /// Classify the entry by extension: `.json` files are sidecars,
    /// everything else is content.
    pub fn kind(&self) -> FileKind {
        if self
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        {
            FileKind::Sidecar
        } else {
            FileKind::Content
        }
    }

    /// Extension of the filename, if present.
    pub fn extension(&self) -> Option<&str> {
        let idx = self.name.rfind('.')?;
        if idx == 0 {
            None
        } else {
            Some(&self.name[idx + 1..])
        }
    }

    /// Filename with the extension (and its dot) removed.
    ///
    /// Dotfiles and extension-less names are returned whole.
    pub fn base_name(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) if idx > 0 => &self.name[..idx],
            _ => &self.name,
        }
    }

    /// Path of a sibling file in the same directory.
    pub fn sibling(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}
