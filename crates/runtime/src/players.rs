//! Per-player tracker registry.
//!
//! [`PlayerFoods`] owns one [`FoodTracker`] per attached player and routes
//! host calls (eating, ticking, stat queries, save/load) through the current
//! oracle generation.
use std::collections::HashMap;

use food_core::{
    ConfigOracle, EatOutcome, FoodRecord, FoodTracker, PlayerId, ResourceId, decode, encode_into,
};

use crate::error::{Result, RuntimeError};
use crate::oracle::OracleManager;

/// Food trackers of every attached player.
pub struct PlayerFoods {
    oracles: OracleManager,
    trackers: HashMap<PlayerId, FoodTracker>,
}

impl PlayerFoods {
    pub fn new(oracles: OracleManager) -> Self {
        Self {
            oracles,
            trackers: HashMap::new(),
        }
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    /// Mutable access for reloading content. Existing trackers keep their
    /// slot count.
    pub fn oracles_mut(&mut self) -> &mut OracleManager {
        &mut self.oracles
    }

    /// Returns the player's tracker, creating an empty one from the current
    /// config on first sight.
    pub fn attach(&mut self, player: PlayerId) -> &mut FoodTracker {
        let config = self.oracles.config();
        self.trackers.entry(player).or_insert_with(|| {
            tracing::debug!(%player, "attached food tracker");
            FoodTracker::new(config)
        })
    }

    pub fn detach(&mut self, player: PlayerId) -> Option<FoodTracker> {
        self.trackers.remove(&player)
    }

    pub fn get(&self, player: PlayerId) -> Option<&FoodTracker> {
        self.trackers.get(&player)
    }

    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }

    pub fn try_eat(&mut self, player: PlayerId, item: &ResourceId) -> Result<EatOutcome> {
        let tracker = self
            .trackers
            .get_mut(&player)
            .ok_or(RuntimeError::PlayerNotAttached(player))?;
        Ok(tracker.try_eat(item, &self.oracles.env()))
    }

    /// False for players without a tracker.
    pub fn can_eat(&self, player: PlayerId, item: &ResourceId) -> bool {
        self.trackers
            .get(&player)
            .is_some_and(|tracker| tracker.can_eat(item, &self.oracles.env()))
    }

    /// Advances every tracker by one tick. Returns the number of expired entries.
    pub fn tick(&mut self) -> usize {
        self.trackers.values_mut().map(FoodTracker::advance).sum()
    }

    /// Advances every tracker by `ticks` skipped ticks (e.g. a night slept
    /// through), unless the config says skipped time does not count.
    pub fn skip_ticks(&mut self, ticks: u32) -> usize {
        if !self.oracles.config().pass_ticks_during_night() {
            tracing::debug!(ticks, "skipped time does not count down food");
            return 0;
        }
        self.trackers
            .values_mut()
            .map(|tracker| tracker.advance_by(ticks))
            .sum()
    }

    pub fn health_bonus(&self, player: PlayerId) -> Option<f32> {
        let env = self.oracles.env();
        self.trackers
            .get(&player)
            .map(|tracker| tracker.total_health_bonus(&env))
    }

    pub fn regen_per_tick(&self, player: PlayerId) -> Option<f32> {
        let env = self.oracles.env();
        self.trackers
            .get(&player)
            .map(|tracker| tracker.total_regen_per_tick(&env))
    }

    /// Encodes the player's tracker into `record`, replacing an earlier save.
    pub fn save(&self, player: PlayerId, record: &mut FoodRecord) -> Result<()> {
        let tracker = self
            .trackers
            .get(&player)
            .ok_or(RuntimeError::PlayerNotAttached(player))?;
        encode_into(tracker, self.oracles.items(), record);
        Ok(())
    }

    /// Decodes `record` and attaches the result, replacing any current tracker.
    pub fn restore(&mut self, player: PlayerId, record: &FoodRecord) -> &FoodTracker {
        let tracker = decode(record, self.oracles.config(), self.oracles.items());
        tracing::debug!(
            %player,
            slots = tracker.slots().len(),
            drink = tracker.drink().is_some(),
            "restored food tracker"
        );
        self.trackers.insert(player, tracker);
        &self.trackers[&player]
    }
}
