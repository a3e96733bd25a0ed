//! Worklist enumeration engine.
//!
//! # Algorithm
//!
//! 1. Seed the worklist with the root path (sentinel only, cost 0)
//! 2. Visit worklist entries from index 0 while the cursor is below the
//!    current length:
//!    a. For each registry item, in registry order, test admissibility:
//!       `cost + item.cost <= budget` and `item.id > last`
//!    b. Append every admissible extension to the end of the worklist
//! 3. Stop when the cursor reaches the end; the worklist is the result
//!
//! Every strictly increasing identifier chain above the sentinel whose
//! cost fits the budget is produced exactly once.

use super::config::EnumerationConfig;
use super::types::{Path, PathNode, PathView};
use crate::error::EnumError;
use crate::logger;
use crate::registry::{ItemId, ItemRegistry};

/// Result of an enumeration run, in discovery order.
///
/// Never empty: index 0 is always the root path.
#[derive(Debug, Clone)]
pub struct Enumeration {
    nodes: Vec<PathNode>,
    budget: f64,
    sentinel: ItemId,
}

impl Enumeration {
    /// Number of paths, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn sentinel(&self) -> ItemId {
        self.sentinel
    }

    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    pub fn root(&self) -> PathView<'_> {
        self.view(0)
    }

    pub fn get(&self, index: usize) -> Option<PathView<'_>> {
        (index < self.nodes.len()).then(|| self.view(index))
    }

    /// Iterates paths in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = PathView<'_>> + '_ {
        (0..self.nodes.len()).map(move |index| self.view(index))
    }

    /// Full sequence of the path at `index`, sentinel first.
    pub fn sequence(&self, index: usize) -> Option<Vec<ItemId>> {
        self.get(index).map(|view| view.sequence())
    }

    /// Longest chain of appended items.
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|node| node.depth).max().unwrap_or(0)
    }

    /// Materializes every path as an owned snapshot.
    pub fn into_paths(self) -> Vec<Path> {
        self.iter().map(|view| view.to_path()).collect()
    }

    fn view(&self, index: usize) -> PathView<'_> {
        PathView {
            nodes: &self.nodes,
            sentinel: self.sentinel,
            index,
        }
    }
}

/// Path enumeration runner.
pub struct PathEnumerator;

impl PathEnumerator {
    /// Enumerates every admissible path over `registry`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_subsets::enumerate::{EnumerationConfig, PathEnumerator};
    /// use u_subsets::registry::ItemRegistry;
    ///
    /// let registry = ItemRegistry::build(&[0.0, 2.0, 4.0]).unwrap();
    /// let config = EnumerationConfig::default().with_budget(5.0);
    /// let result = PathEnumerator::run(&registry, &config).unwrap();
    ///
    /// // root, [1, 2], [1, 3]; [1, 2, 3] would cost 6
    /// assert_eq!(result.len(), 3);
    /// assert!(result.root().is_root());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`EnumError::InvalidBudget`] if the budget is NaN. Nothing
    /// inside the traversal can fail.
    pub fn run(registry: &ItemRegistry, config: &EnumerationConfig) -> Result<Enumeration, EnumError> {
        config.validate()?;
        let budget = config.budget;

        let mut worklist = vec![PathNode::root(config.sentinel)];
        let mut cursor = 0;

        while cursor < worklist.len() {
            let current = worklist[cursor];
            for item in registry {
                if current.total_cost + item.cost <= budget && item.id > current.last {
                    worklist.push(PathNode::extend(cursor, &current, item.id, item.cost));
                }
            }
            cursor += 1;
        }

        let result = Enumeration {
            nodes: worklist,
            budget,
            sentinel: config.sentinel,
        };
        logger::log_verbose_message(format!(
            "enumerated {} paths over {} items (budget {}, sentinel {}, max depth {})",
            result.len(),
            registry.len(),
            budget,
            config.sentinel,
            result.max_depth()
        ));
        Ok(result)
    }

    /// Convenience wrapper: builds the registry from `costs` and runs with
    /// the given budget and the default sentinel.
    pub fn enumerate(costs: &[f64], budget: f64) -> Result<Enumeration, EnumError> {
        let registry = ItemRegistry::build(costs)?;
        Self::run(&registry, &EnumerationConfig::default().with_budget(budget))
    }
}
