//! Content loaders for reading battle data from files.
//!
//! Scenarios are RON documents deserialized straight into
//! [`crate::ScenarioSpec`]; battle tuning is a TOML document deserialized into
//! [`battle_core::BattleConfig`].

pub mod config;
pub mod scenario;

pub use config::ConfigLoader;
pub use scenario::ScenarioLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
