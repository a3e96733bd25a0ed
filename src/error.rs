//! Error type shared by the registry, the enumerator and the output writer.

use thiserror::Error;

use crate::registry::ItemId;

/// Errors surfaced before enumeration starts or while writing results.
///
/// The enumeration loop itself never fails; every variant here is raised
/// either while validating input or while rendering output.
#[derive(Error, Debug)]
pub enum EnumError {
    #[error("invalid input: item {id} has non-finite cost {cost}")]
    NonFiniteCost { id: ItemId, cost: f64 },
    #[error("invalid input: budget must be a number, got {0}")]
    InvalidBudget(f64),
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl EnumError {
    /// Returns `true` for errors caused by malformed costs or budget.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            EnumError::NonFiniteCost { .. } | EnumError::InvalidBudget(_)
        )
    }
}
