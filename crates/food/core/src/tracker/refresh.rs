//! Early-refresh eligibility.

use super::FoodTracker;
use crate::config::FoodConfig;
use crate::env::FoodEnv;
use crate::state::ActiveFood;

impl FoodTracker {
    /// Whether `entry` may be eaten again (or overwritten) before it expires.
    ///
    /// Entries under [`FoodConfig::EARLY_REFRESH_FLOOR_TICKS`] always qualify.
    /// Otherwise the remaining share of the item's own duration must be below
    /// the configured `eat_again_percentage`; an entry whose definition can no
    /// longer be found never qualifies through the ratio.
    pub fn can_refresh_early(entry: &ActiveFood, env: &FoodEnv<'_>) -> bool {
        if entry.ticks_remaining < FoodConfig::EARLY_REFRESH_FLOOR_TICKS {
            return true;
        }

        let Some(definition) = env.definition(&entry.item) else {
            return false;
        };
        let duration = definition.duration_ticks();
        if duration == 0 {
            return false;
        }

        (entry.ticks_remaining as f32 / duration as f32) < env.config().eat_again_percentage()
    }
}
