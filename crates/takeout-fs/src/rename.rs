//! Shared rename executor
//!
//! All three reconciliation phases move files through this executor. It
//! refuses to overwrite an existing destination, treats a same-path move
//! as a no-op, and in dry-run mode reports the intended move without
//! touching the filesystem.

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// What happened (or would happen) to a requested rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The file was moved.
    Renamed,
    /// Dry-run mode: the move was only reported.
    DryRun,
    /// Source and destination are the same path; nothing to do.
    Noop,
    /// Destination already exists; the move was refused.
    DestinationExists,
}

/// Executor for atomic-intent file moves.
#[derive(Debug, Clone, Copy)]
pub struct Renamer {
    dry_run: bool,
}

impl Renamer {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Move `from` to `to`.
    ///
    /// Collisions are refused rather than overwritten: if `to` already
    /// exists (and is not `from` itself), the outcome is
    /// [`RenameOutcome::DestinationExists`] and the tree is unchanged.
    pub fn rename(&self, from: &Path, to: &Path) -> Result<RenameOutcome> {
        if from == to {
            tracing::debug!(path = %from.display(), "rename is a no-op");
            return Ok(RenameOutcome::Noop);
        }

        if to.exists() {
            tracing::warn!(
                from = %from.display(),
                to = %to.display(),
                "destination already exists, refusing to overwrite"
            );
            return Ok(RenameOutcome::DestinationExists);
        }

        if self.dry_run {
            tracing::info!(from = %from.display(), to = %to.display(), "dry-run rename");
            return Ok(RenameOutcome::DryRun);
        }

        fs::rename(from, to).map_err(|e| Error::io(from, e))?;
        tracing::debug!(from = %from.display(), to = %to.display(), "renamed");
        Ok(RenameOutcome::Renamed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_rename_moves_file() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("a.txt");
        let to = temp.path().join("b.txt");
        fs::write(&from, b"x").unwrap();

        let outcome = Renamer::new(false).rename(&from, &to).unwrap();

        assert_eq!(outcome, RenameOutcome::Renamed);
        assert!(!from.exists());
        assert!(to.exists());
    }

    #[test]
    fn test_rename_same_path_is_noop() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.txt");
        fs::write(&path, b"x").unwrap();

        let outcome = Renamer::new(false).rename(&path, &path).unwrap();

        assert_eq!(outcome, RenameOutcome::Noop);
        assert!(path.exists());
    }

    #[test]
    fn test_rename_refuses_existing_destination() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("a.txt");
        let to = temp.path().join("b.txt");
        fs::write(&from, b"source").unwrap();
        fs::write(&to, b"existing").unwrap();

        let outcome = Renamer::new(false).rename(&from, &to).unwrap();

        assert_eq!(outcome, RenameOutcome::DestinationExists);
        assert_eq!(fs::read_to_string(&to).unwrap(), "existing");
        assert!(from.exists());
    }

    #[test]
    fn test_dry_run_leaves_tree_untouched() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("a.txt");
        let to = temp.path().join("b.txt");
        fs::write(&from, b"x").unwrap();

        let outcome = Renamer::new(true).rename(&from, &to).unwrap();

        assert_eq!(outcome, RenameOutcome::DryRun);
        assert!(from.exists());
        assert!(!to.exists());
    }

    #[test]
    fn test_rename_missing_source_is_io_error() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("missing.txt");
        let to = temp.path().join("b.txt");

        let result = Renamer::new(false).rename(&from, &to);

        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
