//! Phase 1: sidecar name normalization
//!
//! Walks the tree and repairs every sidecar filename that exhibits one of
//! the known malformations (abbreviated metadata marker, misplaced
//! disambiguation counter). Later phases depend on observing these
//! renames, so this phase runs first and to completion.

use std::path::Path;

use takeout_fs::{FileKind, Renamer, walk_tree};

use crate::error::Result;
use crate::report::ReconcileReport;
use crate::sidecar::{has_counter_suffix, repair_sidecar_name};

pub struct SidecarNormalizer {
    renamer: Renamer,
}

impl SidecarNormalizer {
    pub fn new(renamer: Renamer) -> Self {
        Self { renamer }
    }

    /// Repair malformed sidecar names under `root`.
    ///
    /// Names matching no known pattern are left untouched; a counter-like
    /// name we cannot interpret is logged as unhandled, not an error.
    pub fn run(&self, root: &Path, report: &mut ReconcileReport) -> Result<()> {
        for entry in walk_tree(root)? {
            if entry.kind() != FileKind::Sidecar {
                continue;
            }

            match repair_sidecar_name(&entry.name) {
                Some(fixed) => {
                    let dest = entry.sibling(&fixed);
                    let outcome = self.renamer.rename(&entry.path, &dest)?;
                    report.record_rename(outcome, &entry.path, &dest);
                }
                None if has_counter_suffix(&entry.name) => {
                    tracing::debug!(
                        path = %entry.path.display(),
                        "counter-suffixed sidecar matches no known marker, leaving unhandled"
                    );
                }
                None => {}
            }
        }
        Ok(())
    }
}
