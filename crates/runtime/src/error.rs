//! Unified error types surfaced by the runtime API.
//!
//! Tracker operations themselves never fail; the only error is addressing a
//! player that was never attached.
use food_core::PlayerId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("player {0} has no food tracker attached")]
    PlayerNotAttached(PlayerId),
}
