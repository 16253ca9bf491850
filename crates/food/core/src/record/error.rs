//! Per-entry problems found while encoding or decoding a record.

use crate::error::{ErrorSeverity, FoodError};
use crate::state::error::ResourceIdError;

/// Why a single entry was skipped. The rest of the record is still used.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RecordEntryError {
    #[error("{key} is empty")]
    EmptyId { key: String },

    #[error("{key} holds unparsable id {raw:?}: {source}")]
    InvalidId {
        key: String,
        raw: String,
        #[source]
        source: ResourceIdError,
    },

    #[error("{key} names unregistered item {item}")]
    Unregistered { key: String, item: String },

    #[error("{key} exceeds {max_slots} slots, entry dropped")]
    OverCapacity { key: String, max_slots: usize },

    #[error("MaxSlots {stored} outside 1..=10, clamped to {clamped}")]
    MaxSlotsOutOfRange { stored: i32, clamped: usize },

    #[error("{key} holds negative ticks {ticks}, clamped to 0")]
    NegativeTicks { key: String, ticks: i32 },

    #[error("Count {stored} exceeds the {keys} keys in the record, extra indices ignored")]
    CountExceedsKeys { stored: i32, keys: usize },
}

impl FoodError for RecordEntryError {
    fn severity(&self) -> ErrorSeverity {
        use RecordEntryError::*;
        match self {
            InvalidId { .. } => ErrorSeverity::Validation,
            EmptyId { .. }
            | Unregistered { .. }
            | OverCapacity { .. }
            | MaxSlotsOutOfRange { .. }
            | NegativeTicks { .. }
            | CountExceedsKeys { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use RecordEntryError::*;
        match self {
            EmptyId { .. } => "RECORD_EMPTY_ID",
            InvalidId { .. } => "RECORD_INVALID_ID",
            Unregistered { .. } => "RECORD_UNREGISTERED_ITEM",
            OverCapacity { .. } => "RECORD_OVER_CAPACITY",
            MaxSlotsOutOfRange { .. } => "RECORD_MAX_SLOTS_OUT_OF_RANGE",
            NegativeTicks { .. } => "RECORD_NEGATIVE_TICKS",
            CountExceedsKeys { .. } => "RECORD_COUNT_EXCEEDS_KEYS",
        }
    }
}
