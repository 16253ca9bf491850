//! Value types stored inside a tracker and its persisted record.
//!
//! Nothing here knows about slot rules; see [`crate::tracker`] for those.
pub mod error;
pub mod types;

pub use error::ResourceIdError;
pub use types::{ActiveFood, PlayerId, ResourceId};
