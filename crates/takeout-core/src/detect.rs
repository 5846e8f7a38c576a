//! Format detection capability
//!
//! The extension corrector needs the true encoded format of a content
//! file. Detection is delegated to an external capability behind the
//! [`FormatDetector`] trait so the reconciliation core can be tested
//! with fakes. The production implementation shells out to `file(1)`,
//! one file at a time.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// External capability returning a content-type identifier for a file.
pub trait FormatDetector {
    /// Check the capability is usable. Called once before a run; failure
    /// is fatal and aborts before any mutation.
    fn probe(&self) -> Result<()>;

    /// Content-type identifier for the file, e.g. `image/png`.
    fn detect(&self, path: &Path) -> Result<String>;
}

/// Detector backed by `file --brief --mime-type`.
#[derive(Debug, Clone)]
pub struct FileCommandDetector {
    program: String,
}

impl FileCommandDetector {
    pub fn new() -> Self {
        Self {
            program: "file".to_string(),
        }
    }

    /// Use an alternative `file`-compatible executable.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for FileCommandDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatDetector for FileCommandDetector {
    fn probe(&self) -> Result<()> {
        Command::new(&self.program)
            .arg("--version")
            .output()
            .map_err(|e| Error::DetectorUnavailable {
                message: format!("{}: {e}", self.program),
            })?;
        Ok(())
    }

    fn detect(&self, path: &Path) -> Result<String> {
        let output = Command::new(&self.program)
            .arg("--brief")
            .arg("--mime-type")
            .arg(path)
            .output()
            .map_err(|e| Error::DetectorUnavailable {
                message: format!("{}: {e}", self.program),
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_fails_for_missing_program() {
        let detector = FileCommandDetector::with_program("definitely-not-a-real-binary");
        assert!(matches!(
            detector.probe(),
            Err(Error::DetectorUnavailable { .. })
        ));
    }

    #[test]
    fn test_detect_fails_for_missing_program() {
        let detector = FileCommandDetector::with_program("definitely-not-a-real-binary");
        let result = detector.detect(Path::new("/tmp/x"));
        assert!(result.is_err());
    }
}
