//! Embed command implementation
//!
//! Thin wrapper over the external metadata-embedding capability.

use std::path::Path;

use colored::Colorize;

use takeout_core::{EmbedOptions, ExiftoolEmbedder, MetadataEmbedder};

use crate::error::{CliError, Result};

/// Run the embed command
///
/// Copies sidecar metadata into content files under `dir`, in place.
pub fn run_embed(dir: &Path, exclude: String, recursive: bool) -> Result<()> {
    if !dir.is_dir() {
        return Err(CliError::user(format!(
            "Target directory not found: {}",
            dir.display()
        )));
    }

    let embedder = ExiftoolEmbedder::new();
    embedder.probe()?;

    println!(
        "{} Embedding sidecar metadata into {}",
        "=>".blue().bold(),
        dir.display()
    );

    let options = EmbedOptions { recursive, exclude };
    embedder.embed(dir, &options)?;

    println!("{} Metadata embedded", "OK".green().bold());
    Ok(())
}
