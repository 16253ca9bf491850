//! Host-facing glue for the food-slot rules.
//!
//! This crate wires the pure `food-core` tracker to everything a host needs
//! around it: the current configuration generation and one tracker per
//! player, saved into and restored from the host's own player data.
//!
//! Modules are organized by responsibility:
//! - [`oracle`] owns config, definition table and item registry snapshots
//! - [`players`] keeps the per-player tracker registry
//! - [`logging`] installs a tracing subscriber
pub mod error;
pub mod logging;
pub mod oracle;
pub mod players;

pub use error::{Result, RuntimeError};
pub use oracle::OracleManager;
pub use players::PlayerFoods;
