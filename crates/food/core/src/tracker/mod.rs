//! Per-player food slots.
//!
//! A [`FoodTracker`] owns up to `max_slots` solid-food timers plus one drink
//! timer. It is mutated only by [`FoodTracker::try_eat`] and the tick methods
//! and is read for stat totals every frame the host needs them.
//!
//! Invariants held after every public operation:
//! - `slots.len() <= max_slots <= FoodConfig::MAX_SLOTS_LIMIT`
//! - `slots` is sorted ascending by `ticks_remaining` whenever membership or
//!   a timer was changed by eating or an entry expired
//! - an entry whose timer reached zero is removed by the tick that zeroed it
mod bonus;
mod eat;
mod refresh;
mod tick;

pub use eat::{Consumed, EatOutcome, Rejection};

use arrayvec::ArrayVec;

use crate::config::FoodConfig;
use crate::env::ConfigOracle;
use crate::state::{ActiveFood, ResourceId};

pub(crate) type Slots = ArrayVec<ActiveFood, { FoodConfig::MAX_SLOTS_LIMIT }>;

/// Active food timers of a single player.
///
/// Cloning produces an independent value copy. The persisted form is a
/// [`crate::FoodRecord`]; see [`crate::record`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoodTracker {
    slots: Slots,
    drink: Option<ActiveFood>,
    max_slots: usize,
}

impl FoodTracker {
    /// Creates an empty tracker, snapshotting the slot count from `config`.
    pub fn new<C: ConfigOracle + ?Sized>(config: &C) -> Self {
        Self::with_max_slots(config.max_slots())
    }

    /// Creates an empty tracker with an explicit slot count, clamped to
    /// `1..=FoodConfig::MAX_SLOTS_LIMIT`.
    pub fn with_max_slots(max_slots: usize) -> Self {
        Self {
            slots: ArrayVec::new(),
            drink: None,
            max_slots: max_slots.clamp(FoodConfig::MIN_SLOTS, FoodConfig::MAX_SLOTS_LIMIT),
        }
    }

    pub fn max_slots(&self) -> usize {
        self.max_slots
    }

    /// Solid-food entries, soonest to expire first.
    pub fn slots(&self) -> &[ActiveFood] {
        &self.slots
    }

    pub fn drink(&self) -> Option<&ActiveFood> {
        self.drink.as_ref()
    }

    pub fn has_free_slot(&self) -> bool {
        self.slots.len() < self.max_slots
    }

    /// True if nothing is active, drink included.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty() && self.drink.is_none()
    }

    /// Solid-food entry for `item`, if it is currently active.
    pub fn active(&self, item: &ResourceId) -> Option<&ActiveFood> {
        self.slots.iter().find(|entry| &entry.item == item)
    }

    /// Drops every slot and the drink.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.drink = None;
    }

    fn sort_slots(&mut self) {
        self.slots.sort_by_key(|entry| entry.ticks_remaining);
    }

    /// Restores an entry decoded from a persisted record.
    ///
    /// Returns false, leaving the tracker untouched, when every slot is taken.
    /// Callers re-sort with [`FoodTracker::finish_restore`] once all entries
    /// are in.
    pub(crate) fn restore_slot(&mut self, entry: ActiveFood) -> bool {
        if !self.has_free_slot() {
            return false;
        }
        self.slots.push(entry);
        true
    }

    pub(crate) fn restore_drink(&mut self, entry: ActiveFood) {
        self.drink = Some(entry);
    }

    pub(crate) fn finish_restore(&mut self) {
        self.sort_slots();
    }
}
