//! Configuration oracle for exposing slot rules to the tracker.

use crate::ResourceId;

/// Provides access to the current configuration snapshot.
pub trait ConfigOracle: Send + Sync {
    /// Slot count given to newly created trackers.
    fn max_slots(&self) -> usize;

    /// Remaining-duration ratio below which an active food is refreshable.
    fn eat_again_percentage(&self) -> f32;

    /// Bonus on the whole stat sum while a drink is active.
    fn drink_bonus(&self) -> f32;

    /// Regen granted before any food contributes.
    fn base_regen_per_tick(&self) -> f32;

    /// Item that clears every slot, if any.
    fn cure_all_item(&self) -> Option<&ResourceId>;

    /// Whether skipped time counts down food timers.
    fn pass_ticks_during_night(&self) -> bool;

    /// Multiplier applied to health and regen sums.
    fn drink_multiplier(&self, drink_active: bool) -> f32 {
        if drink_active {
            1.0 + self.drink_bonus()
        } else {
            1.0
        }
    }
}
