//! Takeout Reconciler CLI
//!
//! The command-line interface for repairing sidecar names and content
//! extensions in a bulk-archive export tree.

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use error::{CliError, Result};

mod cli;
mod commands;
mod error;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!("{} Takeout Reconciler CLI", "takeout".green().bold());
            println!();
            println!("Run {} for available commands.", "takeout --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Fix {
            dir,
            dry_run,
            skip_extensions,
            json,
        } => commands::run_fix(&dir, dry_run, skip_extensions, json),
        Commands::Embed {
            dir,
            exclude,
            no_recursive,
        } => commands::run_embed(&dir, exclude, !no_recursive),
    }
}

/// Set up the tracing subscriber.
///
/// Diagnostics go to stderr; with `--log-file` they are additionally
/// appended, without ANSI codes, to the given file so batch runs stay
/// auditable. `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| CliError::user(format!("Invalid RUST_LOG filter: {e}")))?;

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact();

    let registry = tracing_subscriber::registry().with(filter).with(stderr_layer);

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    CliError::user(format!("Failed to open log file {}: {e}", path.display()))
                })?;
            let file_layer = fmt::layer().with_ansi(false).with_writer(Arc::new(file));
            registry
                .with(file_layer)
                .try_init()
                .map_err(|e| CliError::user(format!("Failed to set up logging: {e}")))?;
        }
        None => {
            registry
                .try_init()
                .map_err(|e| CliError::user(format!("Failed to set up logging: {e}")))?;
        }
    }

    Ok(())
}
