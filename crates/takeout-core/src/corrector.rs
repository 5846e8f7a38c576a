//! Phase 2: extension correction
//!
//! Some export tools write content files with an extension that does not
//! match the actual encoded format. This phase asks the injected
//! [`FormatDetector`] for each file's true content type and renames the
//! extension to the canonical one from the fixed map. `jpg`/`jpeg` files
//! are assumed correct and skipped; unknown content types are never
//! guessed at.

use std::path::Path;

use takeout_fs::{FileEntry, FileKind, RenameOutcome, Renamer, walk_tree};

use crate::detect::FormatDetector;
use crate::error::Result;
use crate::extmap::extension_for;
use crate::report::ReconcileReport;

pub struct ExtensionCorrector<'a> {
    renamer: Renamer,
    detector: &'a dyn FormatDetector,
}

impl<'a> ExtensionCorrector<'a> {
    pub fn new(renamer: Renamer, detector: &'a dyn FormatDetector) -> Self {
        Self { renamer, detector }
    }

    /// Correct mismatched content-file extensions under `root`.
    ///
    /// Sidecar files are never touched. A failure on one file warns and
    /// moves on; it never aborts the rest of the phase.
    pub fn run(&self, root: &Path, report: &mut ReconcileReport) -> Result<()> {
        for entry in walk_tree(root)? {
            if entry.kind() != FileKind::Content {
                continue;
            }
            if is_assumed_correct(&entry) {
                continue;
            }
            self.correct_file(&entry, report)?;
        }
        Ok(())
    }

    fn correct_file(&self, entry: &FileEntry, report: &mut ReconcileReport) -> Result<()> {
        let content_type = match self.detector.detect(&entry.path) {
            Ok(ct) => ct,
            Err(e) => {
                tracing::warn!(path = %entry.path.display(), error = %e, "format detection failed");
                report.warn(format!(
                    "Format detection failed for {}: {e}",
                    entry.path.display()
                ));
                return Ok(());
            }
        };

        let Some(mapped) = extension_for(&content_type) else {
            tracing::warn!(
                path = %entry.path.display(),
                content_type = %content_type,
                "content type not in extension map, leaving unmodified"
            );
            report.warn(format!(
                "Unknown content type {content_type} for {}",
                entry.path.display()
            ));
            return Ok(());
        };

        if entry
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(mapped))
        {
            return Ok(());
        }

        let dest = entry.sibling(&format!("{}.{mapped}", entry.base_name()));
        let outcome = self.renamer.rename(&entry.path, &dest)?;
        if outcome == RenameOutcome::DestinationExists {
            tracing::warn!(
                from = %entry.path.display(),
                to = %dest.display(),
                "corrected-extension target already exists, skipping"
            );
        }
        report.record_rename(outcome, &entry.path, &dest);
        Ok(())
    }
}

/// `jpg`/`jpeg` extensions are taken at face value; re-detecting every
/// photo in a large export costs far more than it catches.
fn is_assumed_correct(entry: &FileEntry) -> bool {
    entry.extension().is_some_and(|ext| {
        ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg")
    })
}
