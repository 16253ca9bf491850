//! In-memory oracle snapshots.
//!
//! These back the oracle traits with plain ordered maps. Hosts build them once
//! per configuration generation (see `food-content`) and share them behind an
//! `Arc`; tests build them by hand.

use std::collections::BTreeMap;

use super::{EffectHandle, EffectOracle, FoodDefinition, FoodOracle, ItemOracle, UseAnim};
use crate::ResourceId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Food definition table for one configuration generation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FoodTableSnapshot {
    definitions: BTreeMap<ResourceId, FoodDefinition>,
}

impl FoodTableSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a definition, replacing any earlier one for the same item.
    ///
    /// Returns the replaced definition.
    pub fn insert(&mut self, definition: FoodDefinition) -> Option<FoodDefinition> {
        self.definitions
            .insert(definition.item().clone(), definition)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodDefinition> {
        self.definitions.values()
    }
}

impl FromIterator<FoodDefinition> for FoodTableSnapshot {
    fn from_iter<T: IntoIterator<Item = FoodDefinition>>(iter: T) -> Self {
        let mut table = Self::new();
        for definition in iter {
            table.insert(definition);
        }
        table
    }
}

impl FoodOracle for FoodTableSnapshot {
    fn definition(&self, item: &ResourceId) -> Option<&FoodDefinition> {
        self.definitions.get(item)
    }

    fn len(&self) -> usize {
        self.definitions.len()
    }
}

/// Per-item facts the host registry exposes to the tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemProperties {
    pub use_animation: UseAnim,
    pub has_nutrition: bool,
}

impl ItemProperties {
    pub fn food() -> Self {
        Self {
            use_animation: UseAnim::Eat,
            has_nutrition: true,
        }
    }

    pub fn drink() -> Self {
        Self {
            use_animation: UseAnim::Drink,
            has_nutrition: false,
        }
    }

    pub fn inedible() -> Self {
        Self::default()
    }
}

/// Snapshot of the host item registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemRegistrySnapshot {
    items: BTreeMap<ResourceId, ItemProperties>,
}

impl ItemRegistrySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, item: ResourceId, properties: ItemProperties) {
        self.items.insert(item, properties);
    }

    /// Builder-style variant of [`ItemRegistrySnapshot::register`].
    pub fn with(mut self, item: ResourceId, properties: ItemProperties) -> Self {
        self.register(item, properties);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemOracle for ItemRegistrySnapshot {
    fn is_registered(&self, item: &ResourceId) -> bool {
        self.items.contains_key(item)
    }

    fn use_animation(&self, item: &ResourceId) -> UseAnim {
        self.items
            .get(item)
            .map(|props| props.use_animation)
            .unwrap_or_default()
    }

    fn has_nutrition(&self, item: &ResourceId) -> bool {
        self.items.get(item).is_some_and(|props| props.has_nutrition)
    }
}

/// Snapshot of the host status-effect registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EffectRegistrySnapshot {
    effects: BTreeMap<ResourceId, EffectHandle>,
}

impl EffectRegistrySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, effect_id: ResourceId, handle: EffectHandle) {
        self.effects.insert(effect_id, handle);
    }

    pub fn with(mut self, effect_id: ResourceId, handle: EffectHandle) -> Self {
        self.register(effect_id, handle);
        self
    }
}

impl EffectOracle for EffectRegistrySnapshot {
    fn resolve(&self, effect_id: &ResourceId) -> Option<EffectHandle> {
        self.effects.get(effect_id).copied()
    }
}
