//! Phase 3: sidecar matching
//!
//! For every content file, make sure its metadata sidecar sits at the
//! canonical name, recovering it from a malformed or oddly-matched
//! sidecar through a prioritized fallback chain. Matching is strictly
//! directory-local; every export subdirectory is self-contained.

use std::path::Path;

use serde::{Deserialize, Serialize};

use takeout_fs::{FileEntry, FileKind, Renamer, list_dir, walk_tree};

use crate::error::Result;
use crate::report::ReconcileReport;
use crate::sidecar::{
    abbreviated_suffix_names, canonical_sidecar_name, legacy_truncated_name,
    matches_candidate_pattern,
};

/// How a content file's sidecar was resolved. Exactly one per content
/// file per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// Canonical sidecar already present; no action.
    AlreadyCorrect,
    /// A single pattern-matched candidate was renamed to canonical.
    UniqueCandidateFound,
    /// Several candidates matched; none touched, human judgment needed.
    MultipleCandidatesFound,
    /// Recovered from a sidecar truncated by one trailing character.
    LegacyTruncatedMatch,
    /// Recovered from an abbreviated-marker sidecar.
    AbbreviatedSuffixMatch,
    /// No sidecar discovered; legitimate for some content files.
    NoMatchFound,
}

pub struct SidecarMatcher {
    renamer: Renamer,
}

impl SidecarMatcher {
    pub fn new(renamer: Renamer) -> Self {
        Self { renamer }
    }

    /// Resolve a sidecar for every content file under `root`.
    pub fn run(&self, root: &Path, report: &mut ReconcileReport) -> Result<()> {
        for entry in walk_tree(root)? {
            if entry.kind() != FileKind::Content {
                continue;
            }
            let result = self.match_content_file(&entry, report)?;
            report.tally.record(result);
        }
        Ok(())
    }

    /// Walk the fallback chain for one content file; first success wins.
    fn match_content_file(
        &self,
        entry: &FileEntry,
        report: &mut ReconcileReport,
    ) -> Result<MatchResult> {
        let canonical = entry.sibling(&canonical_sidecar_name(&entry.name));

        // 1. Already at the canonical name.
        if canonical.is_file() {
            return Ok(MatchResult::AlreadyCorrect);
        }

        // 2. Directory-local pattern search over the middle segment.
        let siblings = list_dir(&entry.dir)?;
        let candidates: Vec<&FileEntry> = siblings
            .iter()
            .filter(|s| matches_candidate_pattern(&s.name, entry.base_name()))
            .collect();

        match candidates.as_slice() {
            [candidate] => {
                if candidate.path != canonical {
                    let outcome = self.renamer.rename(&candidate.path, &canonical)?;
                    report.record_rename(outcome, &candidate.path, &canonical);
                }
                return Ok(MatchResult::UniqueCandidateFound);
            }
            [] => {}
            many => {
                // Ambiguity is a terminal state: report every candidate
                // and touch none of them.
                let listed: Vec<String> =
                    many.iter().map(|c| c.path.display().to_string()).collect();
                tracing::warn!(
                    content = %entry.path.display(),
                    candidates = ?listed,
                    "multiple sidecar candidates, leaving all untouched"
                );
                report.warn(format!(
                    "Multiple sidecar candidates for {}: {}",
                    entry.path.display(),
                    listed.join(", ")
                ));
                return Ok(MatchResult::MultipleCandidatesFound);
            }
        }

        // 3. Sidecar named after a base truncated by one character.
        if let Some(legacy) = legacy_truncated_name(entry.base_name()) {
            let candidate = entry.sibling(&legacy);
            if candidate.is_file() {
                let outcome = self.renamer.rename(&candidate, &canonical)?;
                report.record_rename(outcome, &candidate, &canonical);
                return Ok(MatchResult::LegacyTruncatedMatch);
            }
        }

        // 4. Abbreviated marker suffixes, in probe order.
        for name in abbreviated_suffix_names(&entry.name) {
            let candidate = entry.sibling(&name);
            if candidate.is_file() {
                let outcome = self.renamer.rename(&candidate, &canonical)?;
                report.record_rename(outcome, &candidate, &canonical);
                return Ok(MatchResult::AbbreviatedSuffixMatch);
            }
        }

        // 5. Some content files legitimately have no sidecar.
        tracing::info!(path = %entry.path.display(), "no sidecar found");
        Ok(MatchResult::NoMatchFound)
    }
}
