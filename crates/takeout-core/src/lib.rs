//! Reconciliation engine for bulk-archive photo exports
//!
//! An export tree pairs every content file (photo, video, ...) with a JSON
//! metadata sidecar, but export-tool truncation and counter-placement bugs
//! leave sidecar names mangled and content extensions wrong. This crate
//! repairs the tree in three strictly sequential phases over shared
//! on-disk state:
//!
//! 1. [`SidecarNormalizer`] — repair known-malformed sidecar names;
//! 2. [`ExtensionCorrector`] — fix content extensions that disagree with
//!    the file's true encoded format;
//! 3. [`SidecarMatcher`] — pair every content file with its sidecar at
//!    the canonical name, recovering it through a fallback chain.
//!
//! External capabilities (format detection, metadata embedding) are
//! injectable traits so the core can be exercised with fakes.

pub mod corrector;
pub mod detect;
pub mod embed;
pub mod engine;
pub mod error;
pub mod extmap;
pub mod matcher;
pub mod normalize;
pub mod report;
pub mod sidecar;

pub use corrector::ExtensionCorrector;
pub use detect::{FileCommandDetector, FormatDetector};
pub use embed::{EmbedOptions, ExiftoolEmbedder, MetadataEmbedder};
pub use engine::{ReconcileEngine, ReconcileOptions};
pub use error::{Error, Result};
pub use matcher::{MatchResult, SidecarMatcher};
pub use normalize::SidecarNormalizer;
pub use report::{MatchTally, ReconcileReport};
