//! Item-related state types.
//!
//! - ActiveFood: one running food timer (solid slot or drink slot)

use super::ResourceId;

/// A consumed food whose effect is still running.
///
/// Solid slots and the drink slot share this shape; the rules that govern
/// them live on [`crate::FoodTracker`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveFood {
    pub item: ResourceId,
    pub ticks_remaining: u32,
}

impl ActiveFood {
    pub fn new(item: ResourceId, ticks_remaining: u32) -> Self {
        Self {
            item,
            ticks_remaining,
        }
    }

    /// Restarts the timer, optionally swapping the item.
    pub(crate) fn restart(&mut self, item: &ResourceId, duration_ticks: u32) {
        if &self.item != item {
            self.item = item.clone();
        }
        self.ticks_remaining = duration_ticks;
    }

    /// Counts the timer down by `ticks`, returning true once it has run out.
    pub(crate) fn elapse(&mut self, ticks: u32) -> bool {
        self.ticks_remaining = self.ticks_remaining.saturating_sub(ticks);
        self.ticks_remaining == 0
    }
}
