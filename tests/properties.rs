//! Property tests for the enumeration engine.

use std::collections::HashSet;

use proptest::prelude::*;
use u_subsets::enumerate::{Enumeration, EnumerationConfig, PathEnumerator};
use u_subsets::registry::{ItemId, ItemRegistry};

fn sequence_set(result: &Enumeration) -> HashSet<Vec<usize>> {
    result
        .iter()
        .map(|view| view.sequence().iter().map(|id| id.get()).collect())
        .collect()
}

/// All strictly increasing identifier chains above `sentinel` whose
/// cumulative cost (summed in chain order) fits the budget, with every
/// prefix fitting too. For non-negative costs the prefix condition is
/// implied by the full one.
fn brute_force(costs: &[f64], budget: f64, sentinel: usize) -> HashSet<Vec<usize>> {
    let n = costs.len();
    let mut out = HashSet::new();
    for mask in 0u32..(1u32 << n) {
        let mut seq = vec![sentinel];
        let mut total = 0.0;
        let mut ok = true;
        for pos in 0..n {
            if mask & (1 << pos) == 0 {
                continue;
            }
            let id = pos + 1;
            if id <= sentinel {
                ok = false;
                break;
            }
            total += costs[pos];
            if total > budget {
                ok = false;
                break;
            }
            seq.push(id);
        }
        if ok {
            out.insert(seq);
        }
    }
    out
}

fn costs_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((0u8..6).prop_map(f64::from), 0..9)
}

proptest! {
    #[test]
    fn prop_every_path_fits_budget_and_increases(
        costs in costs_strategy(),
        budget in -2.0f64..20.0,
    ) {
        let result = PathEnumerator::enumerate(&costs, budget).unwrap();
        for view in result.iter() {
            let seq = view.sequence();
            prop_assert!(!seq.is_empty());
            prop_assert!(view.total_cost() <= budget || view.is_root());
            for pair in seq.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn prop_root_first_and_unique(costs in costs_strategy(), budget in -2.0f64..20.0) {
        let result = PathEnumerator::enumerate(&costs, budget).unwrap();
        prop_assert!(result.root().is_root());
        prop_assert_eq!(result.iter().filter(|view| view.is_root()).count(), 1);
        prop_assert_eq!(sequence_set(&result).len(), result.len());
    }

    #[test]
    fn prop_matches_brute_force(
        costs in costs_strategy(),
        budget in 0.0f64..20.0,
        sentinel in 0usize..3,
    ) {
        let registry = ItemRegistry::build(&costs).unwrap();
        let config = EnumerationConfig::default()
            .with_budget(budget)
            .with_sentinel(ItemId::new(sentinel));
        let result = PathEnumerator::run(&registry, &config).unwrap();
        prop_assert_eq!(sequence_set(&result), brute_force(&costs, budget, sentinel));
    }

    #[test]
    fn prop_budget_monotone(
        costs in costs_strategy(),
        b1 in 0.0f64..15.0,
        extra in 0.0f64..10.0,
    ) {
        let small = sequence_set(&PathEnumerator::enumerate(&costs, b1).unwrap());
        let large = sequence_set(&PathEnumerator::enumerate(&costs, b1 + extra).unwrap());
        prop_assert!(small.is_subset(&large));
    }

    #[test]
    fn prop_negative_budget_is_root_only(costs in costs_strategy(), budget in -100.0f64..-0.001) {
        let result = PathEnumerator::enumerate(&costs, budget).unwrap();
        prop_assert_eq!(result.len(), 1);
    }

    #[test]
    fn prop_registry_build_idempotent(costs in prop::collection::vec(-50.0f64..50.0, 0..20)) {
        let a = ItemRegistry::build(&costs).unwrap();
        let b = ItemRegistry::build(&costs).unwrap();
        prop_assert_eq!(a, b);
    }
}
