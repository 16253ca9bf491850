use crate::ResourceId;
use crate::env::ConfigOracle;

/// Tunable rules for food slots, captured as an immutable snapshot.
///
/// Trackers read `max_slots` once at construction; every other value is read
/// through the [`crate::Env`] on each operation, so a reloaded config takes
/// effect immediately for eligibility and stat totals.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct FoodConfig {
    /// Number of distinct solid foods a player can have active (drink excluded).
    pub max_slots: usize,

    /// Fraction of the original duration below which an active food may be
    /// eaten again (0.25 means "under 25% left").
    pub eat_again_percentage: f32,

    /// Bonus applied to the whole health/regen sum while a drink is active
    /// (0.1 = +10%).
    #[cfg_attr(feature = "serde", serde(rename = "drinkSlotFoodEffectivenessBonus"))]
    pub drink_bonus: f32,

    /// Regen granted per tick before any food is added.
    pub base_regen_per_tick: f32,

    /// Item that wipes every slot when consumed. `None` disables the sentinel;
    /// serialized forms write it as an empty string.
    #[cfg_attr(feature = "serde", serde(with = "optional_id"))]
    pub cure_all_item: Option<ResourceId>,

    /// Whether skipped time (sleeping through the night) counts down timers.
    pub pass_ticks_during_night: bool,
}

impl FoodConfig {
    // ===== fixed rules =====
    /// Capacity of the slot storage; `max_slots` can never exceed it.
    pub const MAX_SLOTS_LIMIT: usize = 10;
    pub const MIN_SLOTS: usize = 1;
    /// Entries with fewer ticks left than this are always refreshable.
    pub const EARLY_REFRESH_FLOOR_TICKS: u32 = 1200;
    pub const TICKS_PER_SECOND: u32 = 20;
    pub const MAX_DRINK_BONUS: f32 = 5.0;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_SLOTS: usize = 3;
    pub const DEFAULT_EAT_AGAIN_PERCENTAGE: f32 = 0.2;
    pub const DEFAULT_DRINK_BONUS: f32 = 0.1;
    pub const DEFAULT_BASE_REGEN_PER_TICK: f32 = 0.0;
    pub const DEFAULT_CURE_ALL_ITEM: &'static str = "rotten_flesh";

    pub fn new() -> Self {
        Self {
            max_slots: Self::DEFAULT_MAX_SLOTS,
            eat_again_percentage: Self::DEFAULT_EAT_AGAIN_PERCENTAGE,
            drink_bonus: Self::DEFAULT_DRINK_BONUS,
            base_regen_per_tick: Self::DEFAULT_BASE_REGEN_PER_TICK,
            cure_all_item: ResourceId::vanilla(Self::DEFAULT_CURE_ALL_ITEM).ok(),
            pass_ticks_during_night: true,
        }
    }

    pub fn with_max_slots(mut self, max_slots: usize) -> Self {
        self.max_slots = max_slots;
        self
    }

    pub fn with_eat_again_percentage(mut self, percentage: f32) -> Self {
        self.eat_again_percentage = percentage;
        self
    }

    pub fn with_drink_bonus(mut self, bonus: f32) -> Self {
        self.drink_bonus = bonus;
        self
    }

    pub fn with_base_regen_per_tick(mut self, regen: f32) -> Self {
        self.base_regen_per_tick = regen;
        self
    }

    pub fn with_cure_all_item(mut self, item: Option<ResourceId>) -> Self {
        self.cure_all_item = item;
        self
    }

    /// Clamps a slot count taken from untrusted input (saves, files) into
    /// the supported range.
    pub fn clamp_slots(slots: i64) -> usize {
        slots.clamp(Self::MIN_SLOTS as i64, Self::MAX_SLOTS_LIMIT as i64) as usize
    }

    /// Replaces every out-of-range or non-finite value with its default.
    ///
    /// Each replacement is logged; the result always satisfies the documented
    /// bounds.
    pub fn sanitized(mut self) -> Self {
        if !(Self::MIN_SLOTS..=Self::MAX_SLOTS_LIMIT).contains(&self.max_slots) {
            tracing::warn!(
                "maxSlots {} outside {}..={}, using default {}",
                self.max_slots,
                Self::MIN_SLOTS,
                Self::MAX_SLOTS_LIMIT,
                Self::DEFAULT_MAX_SLOTS
            );
            self.max_slots = Self::DEFAULT_MAX_SLOTS;
        }
        if !(0.0..=1.0).contains(&self.eat_again_percentage) {
            tracing::warn!(
                "eatAgainPercentage {} outside 0..=1, using default {}",
                self.eat_again_percentage,
                Self::DEFAULT_EAT_AGAIN_PERCENTAGE
            );
            self.eat_again_percentage = Self::DEFAULT_EAT_AGAIN_PERCENTAGE;
        }
        if !(0.0..=Self::MAX_DRINK_BONUS).contains(&self.drink_bonus) {
            tracing::warn!(
                "drinkSlotFoodEffectivenessBonus {} outside 0..={}, using default {}",
                self.drink_bonus,
                Self::MAX_DRINK_BONUS,
                Self::DEFAULT_DRINK_BONUS
            );
            self.drink_bonus = Self::DEFAULT_DRINK_BONUS;
        }
        if !self.base_regen_per_tick.is_finite() {
            tracing::warn!(
                "baseRegenPerTick {} is not finite, using default {}",
                self.base_regen_per_tick,
                Self::DEFAULT_BASE_REGEN_PER_TICK
            );
            self.base_regen_per_tick = Self::DEFAULT_BASE_REGEN_PER_TICK;
        }
        self
    }
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigOracle for FoodConfig {
    fn max_slots(&self) -> usize {
        self.max_slots
    }

    fn eat_again_percentage(&self) -> f32 {
        self.eat_again_percentage
    }

    fn drink_bonus(&self) -> f32 {
        self.drink_bonus
    }

    fn base_regen_per_tick(&self) -> f32 {
        self.base_regen_per_tick
    }

    fn cure_all_item(&self) -> Option<&ResourceId> {
        self.cure_all_item.as_ref()
    }

    fn pass_ticks_during_night(&self) -> bool {
        self.pass_ticks_during_night
    }
}

#[cfg(feature = "serde")]
mod optional_id {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::ResourceId;

    pub fn serialize<S: Serializer>(id: &Option<ResourceId>, serializer: S) -> Result<S::Ok, S::Error> {
        match id {
            Some(id) => serializer.collect_str(id),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<ResourceId>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        raw.trim().parse().map(Some).map_err(serde::de::Error::custom)
    }
}
