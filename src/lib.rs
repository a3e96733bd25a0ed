//! Budgeted enumeration of strictly increasing item subsets.
//!
//! - **Registry**: the frozen list of candidate items, numbered from 1 in
//!   input order, each with its own cost.
//! - **Enumerate**: a worklist traversal that extends a root path with
//!   every item whose identifier exceeds the path's last one and whose
//!   cost still fits the budget. All admissible paths are kept, in the
//!   order they were discovered.
//! - **Output**: the line-oriented text format (`couts:` cost lines).
//!
//! # Example
//!
//! ```
//! use u_subsets::enumerate::PathEnumerator;
//! use u_subsets::output;
//!
//! let result = PathEnumerator::enumerate(&[0.0, 2.0, 4.0], 10.0).unwrap();
//! assert_eq!(result.len(), 4);
//! assert!(output::render(&result).starts_with("1\ncouts:0\n"));
//! ```
//!
//! There is no objective: every feasible path is reported, none is
//! preferred.

pub mod enumerate;
pub mod error;
pub mod logger;
pub mod output;
pub mod registry;

pub use error::EnumError;
