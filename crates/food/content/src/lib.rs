//! Data-driven food definitions and loaders.
//!
//! This crate turns configuration into the snapshots `food-core` consumes:
//! - Food definition strings (`item|ticks|hearts|regen[|effect:fraction:amp]*`)
//! - The built-in vanilla definition list
//! - The TOML config file (`[common]` table, data-driven via TOML)
//!
//! Content is consumed by runtime oracles and never appears in tracker state.

pub mod defaults;
pub mod definition;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use defaults::DEFAULT_FOOD_PROPERTIES;
pub use definition::{FoodEntryError, parse_food_entries, parse_food_entry};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigFile, ConfigLoader, FoodContent};
