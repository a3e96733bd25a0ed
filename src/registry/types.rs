//! Item and identifier types.

use std::fmt;

/// Strictly ordered item identifier.
///
/// Registry items are numbered from 1. The same type doubles as the
/// sentinel that bounds the first item a path may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(usize);

impl ItemId {
    /// Wraps a raw identifier.
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for ItemId {
    fn from(raw: usize) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate item: an identifier and the cost of taking it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub cost: f64,
}

impl Item {
    pub fn new(id: ItemId, cost: f64) -> Self {
        Self { id, cost }
    }
}
