//! Metadata embedding capability
//!
//! After reconciliation every content file has its sidecar at the
//! canonical name, so the sidecar's fields can be written into the
//! content file's embedded metadata. The operation itself is delegated
//! to an external capability behind the [`MetadataEmbedder`] trait; the
//! production implementation wraps `exiftool`, which works destructively
//! in place over a file or a whole tree.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};
use crate::sidecar::METADATA_MARKER;

/// Options for a tree-wide embedding run.
#[derive(Debug, Clone)]
pub struct EmbedOptions {
    /// Recurse into subdirectories.
    pub recursive: bool,
    /// Skip files whose name contains this substring.
    pub exclude: String,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            exclude: "edited".to_string(),
        }
    }
}

/// External capability copying sidecar fields into embedded metadata.
pub trait MetadataEmbedder {
    /// Check the capability is usable before starting.
    fn probe(&self) -> Result<()>;

    /// Embed sidecar metadata into every content file under `target`.
    fn embed(&self, target: &Path, options: &EmbedOptions) -> Result<()>;
}

/// Embedder backed by `exiftool -tagsfromfile`.
#[derive(Debug, Clone)]
pub struct ExiftoolEmbedder {
    program: String,
}

impl ExiftoolEmbedder {
    pub fn new() -> Self {
        Self {
            program: "exiftool".to_string(),
        }
    }

    /// Use an alternative exiftool-compatible executable.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ExiftoolEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataEmbedder for ExiftoolEmbedder {
    fn probe(&self) -> Result<()> {
        Command::new(&self.program)
            .arg("-ver")
            .output()
            .map_err(|e| Error::EmbedderUnavailable {
                message: format!("{}: {e}", self.program),
            })?;
        Ok(())
    }

    fn embed(&self, target: &Path, options: &EmbedOptions) -> Result<()> {
        let sidecar_source = format!("%d%F.{METADATA_MARKER}.json");

        let mut cmd = Command::new(&self.program);
        cmd.arg("-d")
            .arg("%s")
            .arg("-tagsfromfile")
            .arg(&sidecar_source)
            // Timestamps
            .arg("-DateTimeOriginal<PhotoTakenTimeTimestamp")
            .arg("-FileModifyDate<PhotoTakenTimeTimestamp")
            // GPS coordinates
            .arg("-GPSLatitude<GeoDataLatitude")
            .arg("-GPSLatitudeRef<GeoDataLatitude")
            .arg("-GPSLongitude<GeoDataLongitude")
            .arg("-GPSLongitudeRef<GeoDataLongitude")
            .arg("-GPSAltitude<GeoDataAltitude")
            // Keywords and description
            .arg("-Keywords<Tags")
            .arg("-Subject<Tags")
            .arg("-Caption-Abstract<Description")
            .arg("-ImageDescription<Description")
            .arg("-overwrite_original")
            .arg("--ext")
            .arg("json");

        if options.recursive {
            cmd.arg("-r");
        }
        if !options.exclude.is_empty() {
            cmd.arg("-if").arg(format!(
                "not $filename =~ /{}/i",
                options.exclude.replace('/', "\\/")
            ));
        }
        cmd.arg(target);

        tracing::debug!(program = %self.program, target = %target.display(), "running embedder");

        let output = cmd.output().map_err(|e| Error::EmbedderUnavailable {
            message: format!("{}: {e}", self.program),
        })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            let code = output.status.code().unwrap_or(-1);
            Err(Error::CommandFailed {
                program: self.program.clone(),
                code,
                stderr,
            })
        }
    }
}
