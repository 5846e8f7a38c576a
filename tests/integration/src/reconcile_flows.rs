//! End-to-end reconciliation flows over realistic export trees.
//!
//! These tests compose every malformation the reconciler handles in one
//! tree, the way a real export mixes them across album directories.

use std::path::Path;

use takeout_core::{
    FormatDetector, ReconcileEngine, ReconcileOptions, ReconcileReport, Result,
};
use takeout_test_utils::ExportTree;

/// Detector whose answer is whatever the file contains.
struct ContentsDetector;

impl FormatDetector for ContentsDetector {
    fn probe(&self) -> Result<()> {
        Ok(())
    }

    fn detect(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)
            .unwrap_or_default()
            .trim()
            .to_string())
    }
}

fn reconcile(tree: &ExportTree, options: ReconcileOptions) -> ReconcileReport {
    ReconcileEngine::new(tree.root(), options, Box::new(ContentsDetector))
        .unwrap()
        .run()
        .unwrap()
}

fn build_mixed_export() -> ExportTree {
    let tree = ExportTree::new();

    // Album 1: healthy pair plus an abbreviated sidecar.
    tree.file("Photos from 2019/beach.jpg", b"image/jpeg");
    tree.sidecar("Photos from 2019/beach.jpg.supplemental-metadata.json");
    tree.file("Photos from 2019/sunset.jpg", b"image/jpeg");
    tree.sidecar("Photos from 2019/sunset.jpg.supplemental-meta.json");

    // Album 2: misplaced counter and a truncated legacy sidecar.
    tree.file("Photos from 2020/img0002(3).jpg", b"image/jpeg");
    tree.sidecar("Photos from 2020/img0002.jpg.supplemental-metadata(3).json");
    tree.file("Photos from 2020/averylongvacationfilename.jpg", b"image/jpeg");
    tree.sidecar("Photos from 2020/averylongvacationfilenam.json");

    // Album 3: wrong extension whose sidecar names the old extension.
    tree.file("Photos from 2021/clip.mp4", b"video/quicktime");
    tree.sidecar("Photos from 2021/clip.mp4.supplemental-metadata.json");

    // Orphan with no sidecar anywhere.
    tree.file("Photos from 2021/orphan.png", b"image/png");

    tree
}

#[test]
fn test_mixed_export_reconciles_completely() {
    let tree = build_mixed_export();

    let report = reconcile(&tree, ReconcileOptions::default());

    // Every content file with a recoverable sidecar ends with it at the
    // canonical name.
    assert!(tree.exists("Photos from 2019/beach.jpg.supplemental-metadata.json"));
    assert!(tree.exists("Photos from 2019/sunset.jpg.supplemental-metadata.json"));
    assert!(tree.exists("Photos from 2020/img0002(3).jpg.supplemental-metadata.json"));
    assert!(tree.exists(
        "Photos from 2020/averylongvacationfilename.jpg.supplemental-metadata.json"
    ));
    assert!(tree.exists("Photos from 2021/clip.mov"));
    assert!(tree.exists("Photos from 2021/clip.mov.supplemental-metadata.json"));

    assert_eq!(report.tally.total(), 6);
    assert_eq!(report.tally.no_match, 1);
    assert_eq!(report.tally.multiple_candidates, 0);
    assert!(report.warnings.is_empty());
}

#[test]
fn test_mixed_export_is_a_fixed_point_after_one_pass() {
    let tree = build_mixed_export();

    reconcile(&tree, ReconcileOptions::default());
    let after_first = tree.snapshot();

    let second = reconcile(&tree, ReconcileOptions::default());

    assert!(second.actions.is_empty(), "unexpected renames: {:?}", second.actions);
    assert_eq!(tree.snapshot(), after_first);
}

#[test]
fn test_dry_run_previews_without_mutating() {
    let tree = build_mixed_export();
    let before = tree.snapshot();

    let report = reconcile(
        &tree,
        ReconcileOptions {
            dry_run: true,
            fix_extensions: true,
        },
    );

    assert_eq!(tree.snapshot(), before);
    assert!(!report.actions.is_empty());
    assert!(report.actions.iter().all(|a| a.starts_with("[dry-run]")));
}

#[test]
fn test_report_round_trips_through_json() {
    let tree = build_mixed_export();

    let report = reconcile(&tree, ReconcileOptions::default());

    let json = serde_json::to_string(&report).unwrap();
    let parsed: ReconcileReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.tally, report.tally);
    assert_eq!(parsed.actions, report.actions);
}
