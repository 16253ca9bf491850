//! Deterministic food-slot rules shared by every host.
//!
//! `food-core` defines how a player's active foods are eaten, refreshed,
//! counted down and turned into stat bonuses. It performs no I/O: world data
//! arrives through the oracle traits in [`env`], and persistence goes through
//! the flat [`record`] codec. All mutation of a player's slots flows through
//! [`FoodTracker`].
pub mod config;
pub mod env;
pub mod error;
pub mod record;
pub mod state;
pub mod tracker;

pub use config::FoodConfig;
pub use env::{
    ConfigOracle, EffectApplication, EffectHandle, EffectOracle, EffectRegistrySnapshot,
    EffectSpec, Env, FoodDefinition, FoodEnv, FoodOracle, FoodTableSnapshot, ItemOracle,
    ItemProperties, ItemRegistrySnapshot, UseAnim,
};
pub use error::{ErrorSeverity, FoodError};
pub use record::{FoodRecord, RecordEntryError, Tag, decode, encode, encode_into};
pub use state::{ActiveFood, PlayerId, ResourceId, ResourceIdError};
pub use tracker::{Consumed, EatOutcome, FoodTracker, Rejection};
