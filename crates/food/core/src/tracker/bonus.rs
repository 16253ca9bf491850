//! Aggregate stat bonuses granted by active foods.

use super::FoodTracker;
use crate::env::{FoodDefinition, FoodEnv};

impl FoodTracker {
    /// Extra max health granted by every active entry.
    pub fn total_health_bonus(&self, env: &FoodEnv<'_>) -> f32 {
        self.aggregate(env, 0.0, FoodDefinition::health_bonus)
    }

    /// Health regenerated per tick, including the configured base rate.
    pub fn total_regen_per_tick(&self, env: &FoodEnv<'_>) -> f32 {
        self.aggregate(env, env.config().base_regen_per_tick(), FoodDefinition::regen_per_tick)
    }

    /// Sums `stat` over slots and drink, starting from `base`, then applies
    /// the drink multiplier to the whole total while a drink is present.
    ///
    /// Entries whose definition is gone contribute nothing.
    fn aggregate(&self, env: &FoodEnv<'_>, base: f32, stat: fn(&FoodDefinition) -> f32) -> f32 {
        let total: f32 = base
            + self
                .slots
                .iter()
                .chain(self.drink.as_ref())
                .filter_map(|entry| env.definition(&entry.item))
                .map(stat)
                .sum::<f32>();

        total * env.config().drink_multiplier(self.drink.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::FoodConfig;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn drink_multiplies_whole_sum() {
        // honey_bottle grants 6, which the fixture needs to be 4 here.
        let mut world = World::new();
        world.foods.insert(crate::env::FoodDefinition::new(
            id("honey_bottle"),
            600,
            4.0,
            0.0,
            Vec::new(),
        ));
        let env = world.env();
        let mut tracker = FoodTracker::new(env.config());
        tracker.try_eat(&id("cooked_beef"), &env);
        tracker.try_eat(&id("honey_bottle"), &env);

        let total = tracker.total_health_bonus(&env);

        assert!((total - 13.2).abs() < EPSILON, "got {total}");
    }

    #[test]
    fn no_multiplier_without_drink() {
        let world = World::new();
        let env = world.env();
        let mut tracker = FoodTracker::new(env.config());
        tracker.try_eat(&id("apple"), &env);
        tracker.try_eat(&id("bread"), &env);

        assert!((tracker.total_health_bonus(&env) - 9.0).abs() < EPSILON);
        assert!((tracker.total_regen_per_tick(&env) - 0.01).abs() < EPSILON);
    }

    #[test]
    fn health_and_regen_share_multiplier_and_base() {
        let world = World::new().with_config(
            FoodConfig::new()
                .with_drink_bonus(0.5)
                .with_base_regen_per_tick(0.1),
        );
        let env = world.env();
        let mut tracker = FoodTracker::new(env.config());
        tracker.try_eat(&id("cooked_beef"), &env);
        tracker.try_eat(&id("milk_bucket"), &env);

        let health = tracker.total_health_bonus(&env);
        let regen = tracker.total_regen_per_tick(&env);

        assert!((health - (8.0 + 4.0) * 1.5).abs() < EPSILON);
        assert!((regen - (0.1 + 0.01 + 0.02) * 1.5).abs() < EPSILON);
    }

    #[test]
    fn missing_definitions_contribute_zero() {
        let world = World::new();
        let env = world.env();
        let mut tracker = FoodTracker::with_max_slots(3);
        tracker.restore_slot(entry("apple", 100));
        tracker.restore_slot(entry("melon_slice", 100));
        // Drink without a definition still switches the multiplier on.
        tracker.restore_drink(entry("stick", 100));

        let total = tracker.total_health_bonus(&env);

        assert!((total - 4.0 * 1.1).abs() < EPSILON, "got {total}");
    }

    #[test]
    fn empty_tracker_reports_base_regen_only() {
        let world = World::new().with_config(FoodConfig::new().with_base_regen_per_tick(0.05));
        let env = world.env();
        let tracker = FoodTracker::new(env.config());

        assert_eq!(tracker.total_health_bonus(&env), 0.0);
        assert!((tracker.total_regen_per_tick(&env) - 0.05).abs() < EPSILON);
    }
}
