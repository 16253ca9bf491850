//! Consumption attempts.
//!
//! [`FoodTracker::try_eat`] and [`FoodTracker::can_eat`] share one planner so
//! the predicate can never disagree with the mutation.

use super::FoodTracker;
use crate::env::FoodEnv;
use crate::state::{ActiveFood, ResourceId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of [`FoodTracker::try_eat`]. A rejection is a normal outcome, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EatOutcome {
    Accepted(Consumed),
    Rejected(Rejection),
}

impl EatOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// What an accepted consumption changed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Consumed {
    /// The cure-all item wiped every slot and the drink.
    Cleared,
    /// The drink slot was empty and now holds the item.
    DrinkFilled,
    /// The drink slot was overwritten early.
    DrinkRefreshed,
    SlotAdded,
    /// The same item was already active; its timer restarted.
    SlotRefreshed,
    /// A different, nearly expired entry made room.
    SlotReplaced { previous: ResourceId },
}

/// Why a consumption was refused. State is unchanged in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rejection {
    /// No definition, or the item is not food-like.
    NotFood,
    /// A drink is active and not yet eligible for refresh.
    DrinkActive,
    /// The item is already active and not yet eligible for refresh.
    NotReadyToRefresh,
    /// Every slot is taken and none is eligible for replacement.
    SlotsFull,
}

enum EatPlan {
    Clear,
    Drink { duration_ticks: u32 },
    RefreshSlot { index: usize, duration_ticks: u32 },
    AddSlot { duration_ticks: u32 },
    ReplaceSlot { index: usize, duration_ticks: u32 },
}

impl FoodTracker {
    /// Attempts to consume `item`, updating slots on acceptance.
    pub fn try_eat(&mut self, item: &ResourceId, env: &FoodEnv<'_>) -> EatOutcome {
        let plan = match self.plan_eat(item, env) {
            Ok(plan) => plan,
            Err(rejection) => {
                tracing::debug!(%item, ?rejection, "food rejected");
                return EatOutcome::Rejected(rejection);
            }
        };

        let consumed = match plan {
            EatPlan::Clear => {
                self.clear();
                Consumed::Cleared
            }
            EatPlan::Drink { duration_ticks } => match self.drink.as_mut() {
                Some(drink) => {
                    drink.restart(item, duration_ticks);
                    Consumed::DrinkRefreshed
                }
                None => {
                    self.drink = Some(ActiveFood::new(item.clone(), duration_ticks));
                    Consumed::DrinkFilled
                }
            },
            EatPlan::RefreshSlot {
                index,
                duration_ticks,
            } => {
                self.slots[index].restart(item, duration_ticks);
                self.sort_slots();
                Consumed::SlotRefreshed
            }
            EatPlan::AddSlot { duration_ticks } => {
                // Capacity was checked by the planner; max_slots never exceeds storage.
                self.slots.push(ActiveFood::new(item.clone(), duration_ticks));
                self.sort_slots();
                Consumed::SlotAdded
            }
            EatPlan::ReplaceSlot {
                index,
                duration_ticks,
            } => {
                let previous = self.slots[index].item.clone();
                self.slots[index].restart(item, duration_ticks);
                self.sort_slots();
                Consumed::SlotReplaced { previous }
            }
        };

        tracing::debug!(%item, ?consumed, "food accepted");
        EatOutcome::Accepted(consumed)
    }

    /// Whether [`FoodTracker::try_eat`] would accept `item` right now.
    pub fn can_eat(&self, item: &ResourceId, env: &FoodEnv<'_>) -> bool {
        self.plan_eat(item, env).is_ok()
    }

    fn plan_eat(&self, item: &ResourceId, env: &FoodEnv<'_>) -> Result<EatPlan, Rejection> {
        if env.is_cure_all(item) {
            return Ok(EatPlan::Clear);
        }

        let definition = env.definition(item).ok_or(Rejection::NotFood)?;
        let duration_ticks = definition.duration_ticks();

        if env.is_drink(item) {
            return match &self.drink {
                Some(drink) if !Self::can_refresh_early(drink, env) => Err(Rejection::DrinkActive),
                _ => Ok(EatPlan::Drink { duration_ticks }),
            };
        }

        if let Some(index) = self.slots.iter().position(|entry| &entry.item == item) {
            if !Self::can_refresh_early(&self.slots[index], env) {
                return Err(Rejection::NotReadyToRefresh);
            }
            return Ok(EatPlan::RefreshSlot {
                index,
                duration_ticks,
            });
        }

        if self.has_free_slot() {
            return Ok(EatPlan::AddSlot { duration_ticks });
        }

        self.slots
            .iter()
            .position(|entry| Self::can_refresh_early(entry, env))
            .map(|index| EatPlan::ReplaceSlot {
                index,
                duration_ticks,
            })
            .ok_or(Rejection::SlotsFull)
    }
}
