//! Item registry.
//!
//! The frozen collection of candidate items an enumeration draws from.
//! Identifiers are 1-based positions in the caller's cost list, so the
//! registry order and the identifier order always agree.

mod store;
mod types;

pub use store::ItemRegistry;
pub use types::{Item, ItemId};
