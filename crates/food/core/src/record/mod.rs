//! Flat key/value persistence of a [`crate::FoodTracker`].
//!
//! A [`FoodRecord`] is the minimal tag map the host embeds inside a player's
//! save data. Key names match the save layout players already have on disk.
//! [`encode`] and [`decode`] convert between a tracker and its record; decoding
//! never fails as a whole and recovers whatever entries still resolve.
mod codec;
mod error;

pub use codec::{decode, encode, encode_into};
pub use error::RecordEntryError;

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Record keys.
pub mod keys {
    pub const MAX_SLOTS: &str = "MaxSlots";
    pub const COUNT: &str = "Count";
    pub const ID_PREFIX: &str = "ID";
    pub const TICKS_PREFIX: &str = "Ticks";
    pub const DRINK_ID: &str = "DrinkID";
    pub const DRINK_TICKS: &str = "DrinkTicks";

    pub fn id(index: usize) -> String {
        format!("{ID_PREFIX}{index}")
    }

    pub fn ticks(index: usize) -> String {
        format!("{TICKS_PREFIX}{index}")
    }

    /// Index of an `ID{i}` or `Ticks{i}` key, `None` for any other key.
    pub fn slot_index(key: &str) -> Option<usize> {
        let digits = key
            .strip_prefix(ID_PREFIX)
            .or_else(|| key.strip_prefix(TICKS_PREFIX))?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

/// A single typed value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Tag {
    Int(i32),
    Str(String),
}

/// Order-independent map of typed tags.
///
/// Getters follow the host's tag semantics: a missing key, or a key holding
/// the other type, reads as `0` or `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct FoodRecord {
    tags: BTreeMap<String, Tag>,
}

impl FoodRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_int(&mut self, key: impl Into<String>, value: i32) {
        self.tags.insert(key.into(), Tag::Int(value));
    }

    pub fn put_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tags.insert(key.into(), Tag::Str(value.into()));
    }

    pub fn get_int(&self, key: &str) -> i32 {
        match self.tags.get(key) {
            Some(Tag::Int(value)) => *value,
            _ => 0,
        }
    }

    pub fn get_string(&self, key: &str) -> &str {
        match self.tags.get(key) {
            Some(Tag::Str(value)) => value,
            _ => "",
        }
    }

    pub fn contains_int(&self, key: &str) -> bool {
        matches!(self.tags.get(key), Some(Tag::Int(_)))
    }

    pub fn contains_string(&self, key: &str) -> bool {
        matches!(self.tags.get(key), Some(Tag::Str(_)))
    }

    pub fn remove(&mut self, key: &str) -> Option<Tag> {
        self.tags.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
