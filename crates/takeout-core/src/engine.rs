//! Reconcile engine
//!
//! Runs the three phases in strict sequence over the same directory
//! tree. Each phase re-scans the tree so it observes every rename the
//! previous phase committed; nothing is cached across phases and nothing
//! runs concurrently.

use std::path::{Path, PathBuf};

use takeout_fs::Renamer;

use crate::corrector::ExtensionCorrector;
use crate::detect::FormatDetector;
use crate::error::{Error, Result};
use crate::matcher::SidecarMatcher;
use crate::normalize::SidecarNormalizer;
use crate::report::ReconcileReport;

/// Options for a reconciliation run.
#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    /// Report intended renames without touching the filesystem.
    pub dry_run: bool,
    /// Run the extension-correction phase. When disabled the format
    /// detector is never consulted.
    pub fix_extensions: bool,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            fix_extensions: true,
        }
    }
}

/// Engine sequencing the reconciliation phases over an export tree.
pub struct ReconcileEngine {
    root: PathBuf,
    options: ReconcileOptions,
    detector: Box<dyn FormatDetector>,
}

impl ReconcileEngine {
    /// Create an engine for the export tree at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is not an existing directory.
    pub fn new(
        root: impl Into<PathBuf>,
        options: ReconcileOptions,
        detector: Box<dyn FormatDetector>,
    ) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::TargetNotFound { path: root });
        }
        Ok(Self {
            root,
            options,
            detector,
        })
    }

    /// Run the full reconciliation.
    ///
    /// Fatal preconditions are checked before any mutation: when
    /// extension correction is enabled, the format-detection capability
    /// must answer a probe. Per-item failures inside a phase warn and
    /// continue; they never abort the run.
    pub fn run(&self) -> Result<ReconcileReport> {
        if self.options.fix_extensions {
            self.detector.probe()?;
        }

        let renamer = Renamer::new(self.options.dry_run);
        let mut report = ReconcileReport::new(self.options.dry_run);

        tracing::info!(root = %self.root.display(), "normalizing sidecar names");
        SidecarNormalizer::new(renamer).run(&self.root, &mut report)?;

        if self.options.fix_extensions {
            tracing::info!(root = %self.root.display(), "correcting content extensions");
            ExtensionCorrector::new(renamer, self.detector.as_ref())
                .run(&self.root, &mut report)?;
        } else {
            tracing::debug!("extension correction disabled");
        }

        tracing::info!(root = %self.root.display(), "matching sidecars");
        SidecarMatcher::new(renamer).run(&self.root, &mut report)?;

        Ok(report)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
