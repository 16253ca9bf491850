//! One configuration generation: slot rules plus the definition table.

use std::path::Path;

use food_core::{EffectOracle, FoodConfig, FoodTableSnapshot};

use crate::defaults::DEFAULT_FOOD_PROPERTIES;
use crate::definition::parse_food_entries;
use crate::loaders::{ConfigLoader, LoadResult};

/// Everything the runtime needs from a config file.
#[derive(Clone, Debug, PartialEq)]
pub struct FoodContent {
    pub config: FoodConfig,
    pub foods: FoodTableSnapshot,
}

impl FoodContent {
    /// Default config with the built-in definition list.
    pub fn defaults<E>(effects: &E) -> Self
    where
        E: EffectOracle + ?Sized,
    {
        Self {
            config: FoodConfig::default(),
            foods: parse_food_entries(DEFAULT_FOOD_PROPERTIES, effects),
        }
    }

    /// Loads a config file and parses its definitions.
    ///
    /// Individual bad definitions are skipped; only an unreadable or
    /// unparsable file is an error.
    pub fn load<E>(path: &Path, effects: &E) -> LoadResult<Self>
    where
        E: EffectOracle + ?Sized,
    {
        let file = ConfigLoader::load(path)?;
        let foods = match &file.food_properties {
            Some(entries) => parse_food_entries(entries, effects),
            None => parse_food_entries(DEFAULT_FOOD_PROPERTIES, effects),
        };
        Ok(Self {
            config: file.config,
            foods,
        })
    }

    /// Like [`FoodContent::load`], falling back to [`FoodContent::defaults`]
    /// with a warning when the file cannot be used.
    pub fn load_or_default<E>(path: &Path, effects: &E) -> Self
    where
        E: EffectOracle + ?Sized,
    {
        match Self::load(path, effects) {
            Ok(content) => content,
            Err(error) => {
                tracing::warn!("{error:#}; using default food config");
                Self::defaults(effects)
            }
        }
    }
}
