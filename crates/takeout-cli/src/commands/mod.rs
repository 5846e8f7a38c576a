//! Command implementations

mod embed;
mod fix;

pub use embed::run_embed;
pub use fix::run_fix;
