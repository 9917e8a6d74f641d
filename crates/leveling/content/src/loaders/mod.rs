//! Loaders for hand-written data files.
//!
//! Rules configuration is TOML. Plans are JSON or TOML documents of any
//! supported schema version.

pub mod config;
pub mod plan;

pub use config::ConfigLoader;
pub use plan::PlanLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
