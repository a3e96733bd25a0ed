//! Budgeted path enumeration.
//!
//! Expands a single root path into every path whose item identifiers
//! strictly increase and whose accumulated cost stays within a budget.
//! The traversal runs over a worklist that grows while it is being read:
//! each visited path appends its admissible extensions to the end, and
//! the walk stops once the read cursor catches up with the list.
//!
//! Paths are stored in an arena. Each node keeps a back-reference to its
//! parent plus the single item it appended, so extending a path never
//! copies or mutates an earlier one.

mod config;
mod runner;
mod types;

pub use config::EnumerationConfig;
pub use runner::{Enumeration, PathEnumerator};
pub use types::{Origin, Path, PathNode, PathView};
