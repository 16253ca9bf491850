//! Food configuration loader.

use std::path::Path;

use food_core::{FoodConfig, ResourceId};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Parsed contents of the config file.
///
/// ```toml
/// [common]
/// maxSlots = 3
/// eatAgainPercentage = 0.2
/// drinkSlotFoodEffectivenessBonus = 0.1
/// foodProperties = ["minecraft:apple|600|4|0.005"]
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigFile {
    /// Sanitized slot rules.
    pub config: FoodConfig,
    /// Raw definition strings. `None` when the key is absent, which selects
    /// the built-in list; an empty list stays empty.
    pub food_properties: Option<Vec<String>>,
}

#[derive(Deserialize, Default)]
struct RawFile {
    #[serde(default)]
    common: RawCommon,
}

/// `[common]` as written. Numbers are read wide so an out-of-range value
/// only loses that value, not the whole file.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RawCommon {
    max_slots: Option<i64>,
    eat_again_percentage: Option<f64>,
    #[serde(rename = "drinkSlotFoodEffectivenessBonus")]
    drink_bonus: Option<f64>,
    base_regen_per_tick: Option<f64>,
    cure_all_item: Option<String>,
    pass_ticks_during_night: Option<bool>,
    food_properties: Option<Vec<String>>,
}

impl RawCommon {
    fn to_config(&self) -> FoodConfig {
        let defaults = FoodConfig::default();

        let max_slots = match self.max_slots {
            None => defaults.max_slots,
            Some(raw) => usize::try_from(raw).unwrap_or_else(|_| {
                tracing::warn!(
                    "maxSlots {} is negative, using default {}",
                    raw,
                    FoodConfig::DEFAULT_MAX_SLOTS
                );
                FoodConfig::DEFAULT_MAX_SLOTS
            }),
        };

        let cure_all_item = match self.cure_all_item.as_deref().map(str::trim) {
            None => defaults.cure_all_item.clone(),
            Some("") => None,
            Some(raw) => match raw.parse::<ResourceId>() {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!("cureAllItem {:?} is not an item id ({}), using default", raw, e);
                    defaults.cure_all_item.clone()
                }
            },
        };

        FoodConfig {
            max_slots,
            eat_again_percentage: self
                .eat_again_percentage
                .map_or(defaults.eat_again_percentage, |v| v as f32),
            drink_bonus: self.drink_bonus.map_or(defaults.drink_bonus, |v| v as f32),
            base_regen_per_tick: self
                .base_regen_per_tick
                .map_or(defaults.base_regen_per_tick, |v| v as f32),
            cure_all_item,
            pass_ticks_during_night: self
                .pass_ticks_during_night
                .unwrap_or(defaults.pass_ticks_during_night),
        }
        .sanitized()
    }
}

/// Loader for food configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file with a `[common]` table
    ///
    /// # Returns
    ///
    /// Returns the sanitized config and the definition strings, if any.
    pub fn load(path: &Path) -> LoadResult<ConfigFile> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {:#}", path.display(), e))
    }

    /// Parses config file contents already in memory.
    pub fn parse(content: &str) -> LoadResult<ConfigFile> {
        let raw: RawFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(ConfigFile {
            config: raw.common.to_config(),
            food_properties: raw.common.food_properties,
        })
    }
}
