//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Takeout Reconciler - Repair sidecar names and extensions in a bulk-archive export
#[derive(Parser, Debug)]
#[command(name = "takeout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Append diagnostics to this file in addition to stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Reconcile sidecar names and content extensions
    ///
    /// Runs three phases in order over the export tree: repair malformed
    /// sidecar names, correct mismatched content extensions, then match
    /// every content file to its canonical sidecar.
    ///
    /// Examples:
    ///   takeout fix ~/Takeout                   # Reconcile in place
    ///   takeout fix ~/Takeout --dry-run         # Preview without renaming
    ///   takeout fix ~/Takeout --skip-extensions # Names only, no format probe
    Fix {
        /// Export directory to reconcile
        dir: PathBuf,

        /// Preview renames without applying them
        #[arg(long, env = "TAKEOUT_DRY_RUN")]
        dry_run: bool,

        /// Skip the extension-correction phase
        #[arg(long, env = "TAKEOUT_SKIP_EXTENSIONS")]
        skip_extensions: bool,

        /// Output the report as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Embed sidecar metadata into content files (runs exiftool)
    ///
    /// Copies timestamps, GPS coordinates, keywords, and descriptions
    /// from each canonical sidecar into the content file, in place.
    Embed {
        /// Export directory to process
        dir: PathBuf,

        /// Skip files whose name contains this substring
        #[arg(long, default_value = "edited")]
        exclude: String,

        /// Do not recurse into subdirectories
        #[arg(long)]
        no_recursive: bool,
    },
}
