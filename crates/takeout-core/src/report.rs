//! Run report
//!
//! Every rename (real or dry-run) and every recoverable problem ends up
//! here, so a batch run over a large tree stays auditable after the fact.

use std::path::Path;

use serde::{Deserialize, Serialize};

use takeout_fs::RenameOutcome;

use crate::matcher::MatchResult;

/// Per-result counts for the sidecar matcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTally {
    pub already_correct: usize,
    pub unique_candidate: usize,
    pub multiple_candidates: usize,
    pub legacy_truncated: usize,
    pub abbreviated_suffix: usize,
    pub no_match: usize,
}

impl MatchTally {
    pub fn record(&mut self, result: MatchResult) {
        match result {
            MatchResult::AlreadyCorrect => self.already_correct += 1,
            MatchResult::UniqueCandidateFound => self.unique_candidate += 1,
            MatchResult::MultipleCandidatesFound => self.multiple_candidates += 1,
            MatchResult::LegacyTruncatedMatch => self.legacy_truncated += 1,
            MatchResult::AbbreviatedSuffixMatch => self.abbreviated_suffix += 1,
            MatchResult::NoMatchFound => self.no_match += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.already_correct
            + self.unique_candidate
            + self.multiple_candidates
            + self.legacy_truncated
            + self.abbreviated_suffix
            + self.no_match
    }
}

/// Record of a reconciliation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileReport {
    /// Whether the run was a dry run.
    pub dry_run: bool,
    /// Renames performed, or in dry-run mode the renames that would be.
    pub actions: Vec<String>,
    /// Recoverable problems encountered; none of these abort the run.
    pub warnings: Vec<String>,
    /// Match results per content file.
    pub tally: MatchTally,
}

impl ReconcileReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            actions: Vec::new(),
            warnings: Vec::new(),
            tally: MatchTally::default(),
        }
    }

    pub fn action(&mut self, action: impl Into<String>) {
        self.actions.push(action.into());
    }

    pub fn warn(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Record the outcome of a rename attempt.
    ///
    /// No-ops are silent; refused collisions become warnings.
    pub fn record_rename(&mut self, outcome: RenameOutcome, from: &Path, to: &Path) {
        match outcome {
            RenameOutcome::Renamed => {
                self.action(format!("Renamed {} -> {}", from.display(), to.display()));
            }
            RenameOutcome::DryRun => {
                self.action(format!(
                    "[dry-run] Would rename {} -> {}",
                    from.display(),
                    to.display()
                ));
            }
            RenameOutcome::Noop => {}
            RenameOutcome::DestinationExists => {
                self.warn(format!(
                    "Destination already exists, left {} in place (wanted {})",
                    from.display(),
                    to.display()
                ));
            }
        }
    }

    /// True when nothing was renamed and nothing went wrong.
    pub fn is_clean(&self) -> bool {
        self.actions.is_empty() && self.warnings.is_empty()
    }
}
