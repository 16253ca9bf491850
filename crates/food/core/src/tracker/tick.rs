use super::FoodTracker;

impl FoodTracker {
    /// Advances every timer by one game tick.
    ///
    /// Returns how many entries (slots and drink) expired.
    pub fn advance(&mut self) -> usize {
        self.advance_by(1)
    }

    /// Advances every timer by `ticks` whole ticks at once, used when the host
    /// skips time. Removal follows the same rules as [`FoodTracker::advance`].
    pub fn advance_by(&mut self, ticks: u32) -> usize {
        if ticks == 0 {
            return 0;
        }

        let before = self.slots.len();
        self.slots.retain(|entry| {
            let gone = entry.elapse(ticks);
            if gone {
                tracing::trace!(item = %entry.item, "food slot expired");
            }
            !gone
        });
        let mut expired = before - self.slots.len();

        if let Some(drink) = self.drink.as_mut()
            && drink.elapse(ticks)
        {
            tracing::trace!(item = %drink.item, "drink expired");
            self.drink = None;
            expired += 1;
        }

        if self.slots.len() != before {
            self.sort_slots();
        }
        expired
    }
}
