//! Filesystem layer for the takeout reconciler
//!
//! Provides directory scanning, the file-entry model, and the shared
//! rename executor with dry-run support.

pub mod entry;
pub mod error;
pub mod rename;
pub mod scan;

pub use entry::{FileEntry, FileKind};
pub use error::{Error, Result};
pub use rename::{RenameOutcome, Renamer};
pub use scan::{list_dir, walk_tree};
