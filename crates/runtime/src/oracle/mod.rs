//! Runtime ownership of the current configuration generation.
//!
//! The [`OracleManager`] holds the config, definition table and host item
//! registry behind `Arc`s and builds [`food_core::FoodEnv`] snapshots on
//! demand. Reloading swaps a whole component; nothing is merged. Trackers
//! created before a reload keep the slot count they were created with.
use std::sync::Arc;

use food_content::FoodContent;
use food_core::{
    ConfigOracle, Env, FoodConfig, FoodEnv, FoodOracle, FoodTableSnapshot, ItemOracle,
    ItemRegistrySnapshot,
};

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) config: Arc<FoodConfig>,
    pub(crate) foods: Arc<FoodTableSnapshot>,
    pub(crate) items: Arc<dyn ItemOracle>,
    generation: u64,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        config: Arc<FoodConfig>,
        foods: Arc<FoodTableSnapshot>,
        items: Arc<dyn ItemOracle>,
    ) -> Self {
        Self {
            config,
            foods,
            items,
            generation: 0,
        }
    }

    /// Manager over loaded content and a host item registry.
    pub fn from_content(content: FoodContent, items: Arc<dyn ItemOracle>) -> Self {
        Self::new(Arc::new(content.config), Arc::new(content.foods), items)
    }

    /// Manager for a host that has not populated anything yet: default
    /// config, empty table, empty registry.
    pub fn unpopulated() -> Self {
        Self::new(
            Arc::new(FoodConfig::default()),
            Arc::new(FoodTableSnapshot::new()),
            Arc::new(ItemRegistrySnapshot::new()),
        )
    }

    pub fn replace_config(&mut self, config: FoodConfig) {
        self.config = Arc::new(config);
        self.bump("config");
    }

    pub fn replace_foods(&mut self, foods: FoodTableSnapshot) {
        self.foods = Arc::new(foods);
        self.bump("foods");
    }

    pub fn replace_items(&mut self, items: Arc<dyn ItemOracle>) {
        self.items = items;
        self.bump("items");
    }

    /// Swaps config and definition table together as one generation.
    pub fn replace_content(&mut self, content: FoodContent) {
        self.config = Arc::new(content.config);
        self.foods = Arc::new(content.foods);
        self.bump("content");
    }

    /// Incremented by every replacement.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &FoodConfig {
        &self.config
    }

    pub fn items(&self) -> &dyn ItemOracle {
        self.items.as_ref()
    }

    /// Converts oracle manager into FoodEnv for food-core
    pub fn env(&self) -> FoodEnv<'_> {
        Env::with_all(
            self.foods.as_ref() as &dyn FoodOracle,
            self.items.as_ref(),
            self.config.as_ref() as &dyn ConfigOracle,
        )
    }

    fn bump(&mut self, component: &str) {
        self.generation += 1;
        tracing::info!(
            generation = self.generation,
            "replaced {component}; {} food definitions active",
            self.foods.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use food_core::{FoodDefinition, ItemProperties, ResourceId};

    use super::*;

    fn id(s: &str) -> ResourceId {
        s.parse().unwrap()
    }

    #[test]
    fn unpopulated_manager_knows_no_food() {
        let manager = OracleManager::unpopulated();
        assert!(manager.env().definition(&id("apple")).is_none());
        assert_eq!(manager.generation(), 0);
    }

    #[test]
    fn replacements_are_wholesale_and_counted() {
        let mut manager = OracleManager::unpopulated();
        manager.replace_items(Arc::new(
            ItemRegistrySnapshot::new().with(id("apple"), ItemProperties::food()),
        ));
        manager.replace_foods(
            [FoodDefinition::new(id("apple"), 600, 4.0, 0.005, Vec::new())]
                .into_iter()
                .collect(),
        );
        assert!(manager.env().definition(&id("apple")).is_some());

        manager.replace_foods(FoodTableSnapshot::new());
        assert!(manager.env().definition(&id("apple")).is_none());

        manager.replace_config(FoodConfig::new().with_max_slots(6));
        assert_eq!(manager.env().config().max_slots(), 6);
        assert_eq!(manager.generation(), 4);
    }
}
