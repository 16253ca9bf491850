use crate::ResourceId;
use crate::config::FoodConfig;
use crate::env::EffectHandle;

/// Read-only food definition table keyed by item identifier.
///
/// Implementations are immutable for one configuration generation; reloading
/// builds a new table instead of mutating the old one.
pub trait FoodOracle: Send + Sync {
    fn definition(&self, item: &ResourceId) -> Option<&FoodDefinition>;

    /// Number of definitions in the table.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Potency and duration of one food item.
///
/// Constructed through [`FoodDefinition::new`], which clamps the inputs, so
/// `duration_ticks >= 1` and `health_bonus >= 0` always hold. Deserializing
/// goes through the same constructor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "FoodDefinitionFields")
)]
pub struct FoodDefinition {
    item: ResourceId,
    duration_ticks: u32,
    health_bonus: f32,
    regen_per_tick: f32,
    extra_effects: Vec<EffectSpec>,
}

impl FoodDefinition {
    pub fn new(
        item: ResourceId,
        duration_ticks: i64,
        health_bonus: f32,
        regen_per_tick: f32,
        extra_effects: Vec<EffectSpec>,
    ) -> Self {
        Self {
            item,
            duration_ticks: duration_ticks.clamp(1, i64::from(u32::MAX)) as u32,
            health_bonus: health_bonus.max(0.0),
            regen_per_tick,
            extra_effects,
        }
    }

    pub fn item(&self) -> &ResourceId {
        &self.item
    }

    pub fn duration_ticks(&self) -> u32 {
        self.duration_ticks
    }

    pub fn health_bonus(&self) -> f32 {
        self.health_bonus
    }

    /// Signed: negative values drain health while the food is active.
    pub fn regen_per_tick(&self) -> f32 {
        self.regen_per_tick
    }

    pub fn regen_per_second(&self) -> f32 {
        self.regen_per_tick * FoodConfig::TICKS_PER_SECOND as f32
    }

    pub fn extra_effects(&self) -> &[EffectSpec] {
        &self.extra_effects
    }

    /// Status effects to apply when this food is eaten, with durations scaled
    /// to this food's duration.
    pub fn effect_applications(&self) -> impl Iterator<Item = EffectApplication> + '_ {
        self.extra_effects.iter().map(|spec| EffectApplication {
            handle: spec.handle,
            duration_ticks: spec.duration_ticks(self.duration_ticks),
            amplifier: spec.amplifier,
        })
    }
}

/// Status effect granted alongside a food.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "EffectSpecFields")
)]
pub struct EffectSpec {
    pub effect_id: ResourceId,
    /// Host handle resolved when the table was built.
    pub handle: EffectHandle,
    /// Share of the food's duration the effect lasts, in `0.0..=1.0`.
    pub duration_fraction: f32,
    /// Effect level, 0 = level I.
    pub amplifier: u32,
}

impl EffectSpec {
    pub fn new(
        effect_id: ResourceId,
        handle: EffectHandle,
        duration_fraction: f32,
        amplifier: i64,
    ) -> Self {
        let duration_fraction = if duration_fraction.is_nan() {
            0.0
        } else {
            duration_fraction.clamp(0.0, 1.0)
        };
        Self {
            effect_id,
            handle,
            duration_fraction,
            amplifier: amplifier.clamp(0, i64::from(u32::MAX)) as u32,
        }
    }

    /// Effect duration for a food lasting `food_duration_ticks`, rounded down.
    pub fn duration_ticks(&self, food_duration_ticks: u32) -> u32 {
        (food_duration_ticks as f64 * self.duration_fraction as f64) as u32
    }
}

/// Unchecked wire form of [`FoodDefinition`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct FoodDefinitionFields {
    item: ResourceId,
    duration_ticks: i64,
    health_bonus: f32,
    regen_per_tick: f32,
    #[serde(default)]
    extra_effects: Vec<EffectSpec>,
}

#[cfg(feature = "serde")]
impl From<FoodDefinitionFields> for FoodDefinition {
    fn from(fields: FoodDefinitionFields) -> Self {
        Self::new(
            fields.item,
            fields.duration_ticks,
            fields.health_bonus,
            fields.regen_per_tick,
            fields.extra_effects,
        )
    }
}

/// Unchecked wire form of [`EffectSpec`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct EffectSpecFields {
    effect_id: ResourceId,
    handle: EffectHandle,
    duration_fraction: f32,
    amplifier: i64,
}

#[cfg(feature = "serde")]
impl From<EffectSpecFields> for EffectSpec {
    fn from(fields: EffectSpecFields) -> Self {
        Self::new(
            fields.effect_id,
            fields.handle,
            fields.duration_fraction,
            fields.amplifier,
        )
    }
}

/// Concrete effect instance the host should apply after a meal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectApplication {
    pub handle: EffectHandle,
    pub duration_ticks: u32,
    pub amplifier: u32,
}
