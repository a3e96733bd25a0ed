//! Enumeration configuration.

use crate::error::EnumError;
use crate::registry::ItemId;

/// Configuration parameters for path enumeration.
///
/// # Examples
///
/// ```
/// use u_subsets::enumerate::EnumerationConfig;
/// use u_subsets::registry::ItemId;
///
/// let config = EnumerationConfig::default()
///     .with_budget(12.5)
///     .with_sentinel(ItemId::new(0));
/// assert_eq!(config.budget, 12.5);
/// assert_eq!(config.sentinel, ItemId::new(0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumerationConfig {
    /// Upper bound on a path's accumulated cost (inclusive).
    pub budget: f64,
    /// Leading element of every sequence. The first appended item must
    /// have an identifier strictly greater than this.
    pub sentinel: ItemId,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            budget: 10.0,
            sentinel: ItemId::new(1),
        }
    }
}

impl EnumerationConfig {
    /// Sets the budget.
    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }

    /// Sets the sentinel.
    pub fn with_sentinel(mut self, sentinel: ItemId) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Validates the configuration.
    ///
    /// Infinite budgets are allowed; `+inf` admits every increasing
    /// subsequence and `-inf` admits nothing.
    pub fn validate(&self) -> Result<(), EnumError> {
        if self.budget.is_nan() {
            return Err(EnumError::InvalidBudget(self.budget));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = EnumerationConfig::default();
        assert!((config.budget - 10.0).abs() < 1e-10);
        assert_eq!(config.sentinel, ItemId::new(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = EnumerationConfig::default()
            .with_budget(-1.0)
            .with_sentinel(ItemId::new(4));
        assert!((config.budget + 1.0).abs() < 1e-10);
        assert_eq!(config.sentinel, ItemId::new(4));
    }

    #[test]
    fn test_config_validation() {
        assert!(EnumerationConfig::default()
            .with_budget(f64::INFINITY)
            .validate()
            .is_ok());
        assert!(EnumerationConfig::default()
            .with_budget(f64::NEG_INFINITY)
            .validate()
            .is_ok());

        let err = EnumerationConfig::default()
            .with_budget(f64::NAN)
            .validate()
            .unwrap_err();
        assert!(err.is_invalid_input());
    }
}
