//! Fix command implementation
//!
//! Runs the full reconciliation over an export tree and prints a summary.

use std::path::Path;

use colored::Colorize;

use takeout_core::{
    FileCommandDetector, ReconcileEngine, ReconcileOptions, ReconcileReport,
};

use crate::error::Result;

/// Run the fix command
///
/// Reconciles the export tree at `dir`. With `json` the report is
/// printed as JSON and the human summary is suppressed.
pub fn run_fix(dir: &Path, dry_run: bool, skip_extensions: bool, json: bool) -> Result<()> {
    let options = ReconcileOptions {
        dry_run,
        fix_extensions: !skip_extensions,
    };

    let engine = ReconcileEngine::new(dir, options, Box::new(FileCommandDetector::new()))?;
    let report = engine.run()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(dir, &report);
    Ok(())
}

fn print_summary(dir: &Path, report: &ReconcileReport) {
    if report.dry_run {
        println!(
            "{} Dry run over {} - no files were changed",
            "=>".blue().bold(),
            dir.display()
        );
    } else {
        println!("{} Reconciled {}", "=>".blue().bold(), dir.display());
    }

    for action in &report.actions {
        println!("   {} {}", "-".green(), action);
    }
    for warning in &report.warnings {
        println!("   {} {}", "!".yellow(), warning);
    }

    let tally = &report.tally;
    println!();
    println!(
        "{} {} content files: {} already correct, {} recovered, {} without sidecar",
        "OK".green().bold(),
        tally.total(),
        tally.already_correct,
        tally.unique_candidate + tally.legacy_truncated + tally.abbreviated_suffix,
        tally.no_match
    );
    if tally.multiple_candidates > 0 {
        println!(
            "{} {} ambiguous matches need human review (see warnings above)",
            "WARN".yellow().bold(),
            tally.multiple_candidates
        );
    }
}
