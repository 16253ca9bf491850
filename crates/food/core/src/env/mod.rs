//! Traits describing read-only world data.
//!
//! Oracles expose the food definition table, the host item registry, the
//! effect registry and the configuration snapshot. The [`Env`] aggregate
//! bundles the ones a tracker needs so it never reaches for global state.
//!
//! A host may build an `Env` before its tables are populated. Missing oracles
//! behave like empty ones: every lookup comes back absent and no operation
//! panics.
mod config;
mod effects;
mod foods;
mod items;
mod snapshot;

pub use config::ConfigOracle;
pub use effects::{EffectHandle, EffectOracle};
pub use foods::{EffectApplication, EffectSpec, FoodDefinition, FoodOracle};
pub use items::{ItemOracle, UseAnim};
pub use snapshot::{EffectRegistrySnapshot, FoodTableSnapshot, ItemProperties, ItemRegistrySnapshot};

use crate::ResourceId;

/// Aggregates read-only oracles required by tracker operations.
pub struct Env<'a, F, I, C>
where
    F: FoodOracle + ?Sized,
    I: ItemOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    foods: Option<&'a F>,
    items: Option<&'a I>,
    config: &'a C,
}

impl<F, I, C> Clone for Env<'_, F, I, C>
where
    F: FoodOracle + ?Sized,
    I: ItemOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<F, I, C> Copy for Env<'_, F, I, C>
where
    F: FoodOracle + ?Sized,
    I: ItemOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
}

pub type FoodEnv<'a> = Env<'a, dyn FoodOracle + 'a, dyn ItemOracle + 'a, dyn ConfigOracle + 'a>;

impl<'a, F, I, C> Env<'a, F, I, C>
where
    F: FoodOracle + ?Sized,
    I: ItemOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    pub fn new(foods: Option<&'a F>, items: Option<&'a I>, config: &'a C) -> Self {
        Self {
            foods,
            items,
            config,
        }
    }

    pub fn with_all(foods: &'a F, items: &'a I, config: &'a C) -> Self {
        Self::new(Some(foods), Some(items), config)
    }

    /// Environment for a host whose tables are not loaded yet.
    pub fn unpopulated(config: &'a C) -> Self {
        Self::new(None, None, config)
    }

    pub fn config(&self) -> &'a C {
        self.config
    }

    /// Returns the definition of a trackable item.
    ///
    /// An item is trackable only if the registry considers it food-like AND
    /// the table has an entry for it; anything else is silently absent.
    pub fn definition(&self, item: &ResourceId) -> Option<&'a FoodDefinition> {
        let items = self.items?;
        if !items.is_food_like(item) {
            return None;
        }
        self.foods?.definition(item)
    }

    /// True if the item is consumed with the drink animation.
    pub fn is_drink(&self, item: &ResourceId) -> bool {
        self.items
            .is_some_and(|items| items.use_animation(item).is_drink())
    }

    /// True if the item resolves in the host registry.
    pub fn is_registered(&self, item: &ResourceId) -> bool {
        self.items.is_some_and(|items| items.is_registered(item))
    }

    /// True if the item is the configured cure-all sentinel.
    pub fn is_cure_all(&self, item: &ResourceId) -> bool {
        self.config.cure_all_item() == Some(item)
    }
}

impl<'a, F, I, C> Env<'a, F, I, C>
where
    F: FoodOracle + 'a,
    I: ItemOracle + 'a,
    C: ConfigOracle + 'a,
{
    /// Converts this environment into a trait-object based `FoodEnv` (consumes self).
    pub fn into_food_env(self) -> FoodEnv<'a> {
        let foods: Option<&'a dyn FoodOracle> = self.foods.map(|foods| foods as _);
        let items: Option<&'a dyn ItemOracle> = self.items.map(|items| items as _);
        let config: &'a dyn ConfigOracle = self.config;
        Env::new(foods, items, config)
    }

    /// Converts this environment into a trait-object based `FoodEnv` (borrows self).
    pub fn as_food_env(&self) -> FoodEnv<'a> {
        let foods: Option<&'a dyn FoodOracle> = self.foods.map(|foods| foods as _);
        let items: Option<&'a dyn ItemOracle> = self.items.map(|items| items as _);
        let config: &'a dyn ConfigOracle = self.config;
        Env::new(foods, items, config)
    }
}
