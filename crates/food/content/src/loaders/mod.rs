//! Content loaders for reading food data from files.
//!
//! This module converts the TOML config file into a [`food_core::FoodConfig`]
//! plus a [`food_core::FoodTableSnapshot`] ready to hand to the runtime.

pub mod config;
pub mod content;

pub use config::{ConfigFile, ConfigLoader};
pub use content::FoodContent;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
