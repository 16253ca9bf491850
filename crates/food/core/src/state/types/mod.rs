pub mod common;
pub mod item;

pub use common::{PlayerId, ResourceId};
pub use item::ActiveFood;
