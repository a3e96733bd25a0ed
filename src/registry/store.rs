//! Registry construction and read-only access.

use super::types::{Item, ItemId};
use crate::error::EnumError;
use crate::logger;

/// Frozen, ordered collection of items.
///
/// # Examples
///
/// ```
/// use u_subsets::registry::{ItemId, ItemRegistry};
///
/// let registry = ItemRegistry::build(&[0.0, 2.0, 4.0]).unwrap();
/// assert_eq!(registry.len(), 3);
/// assert_eq!(registry.get(ItemId::new(2)).unwrap().cost, 2.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRegistry {
    items: Vec<Item>,
}

impl ItemRegistry {
    /// Builds a registry from costs in input order.
    ///
    /// Item `i` (0-based) receives identifier `i + 1`. Costs are taken
    /// verbatim; negative costs are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`EnumError::NonFiniteCost`] if any cost is NaN or infinite.
    pub fn build(costs: &[f64]) -> Result<Self, EnumError> {
        let mut items = Vec::with_capacity(costs.len());
        for (pos, &cost) in costs.iter().enumerate() {
            let id = ItemId::new(pos + 1);
            if !cost.is_finite() {
                return Err(EnumError::NonFiniteCost { id, cost });
            }
            if cost < 0.0 {
                logger::log_verbose_warning(format!(
                    "item {id} has negative cost {cost}; budget pruning may admit long paths"
                ));
            }
            items.push(Item::new(id, cost));
        }
        Ok(Self { items })
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by identifier.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        id.get().checked_sub(1).and_then(|pos| self.items.get(pos))
    }

    /// Iterates items in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Costs in registry order.
    pub fn costs(&self) -> Vec<f64> {
        self.items.iter().map(|item| item.cost).collect()
    }
}

impl<'a> IntoIterator for &'a ItemRegistry {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
