//! DP execution and backtracking.

use super::config::DpConfig;
use crate::error::{Result, SolveError};
use crate::item::Item;
use crate::money::{self, Cents};
use crate::selection::Selection;
use rust_decimal::Decimal;

/// Result of a DP solve.
#[derive(Debug, Clone)]
pub struct DpResult {
    /// The optimal selection, in original input order.
    pub selection: Selection,

    /// The quantized budget the tables were sized for, in cents.
    pub capacity: Cents,

    /// Total cost of the selection in cents: what the backtrack
    /// actually spent out of `capacity`.
    pub spent: Cents,
}

impl DpResult {
    fn empty(capacity: Cents) -> Self {
        Self {
            selection: Selection::empty(),
            capacity,
            spent: 0,
        }
    }
}

/// Executes the exact DP solve.
pub struct DpRunner;

impl DpRunner {
    /// Solves the 0/1 knapsack over `items` under `budget`.
    ///
    /// Items are quantized to integer cents, the value table is swept
    /// per item in reverse-capacity order (which is what enforces the
    /// no-repeat 0/1 property), and the optimal subset is
    /// reconstructed from the decision table. Empty input or a budget
    /// quantizing to zero returns an empty selection, not an error.
    pub fn run(items: &[Item], budget: Decimal, config: &DpConfig) -> Result<DpResult> {
        let capacity = money::quantize_budget(budget)?;
        if capacity as u64 > config.max_capacity as u64 {
            return Err(SolveError::CapacityOverflow {
                required: capacity as u64,
                limit: config.max_capacity as u64,
            });
        }

        // Defensive re-validation: loaders own the invariants, but a
        // violation must surface as an error, never as a wrong answer.
        let costs = items
            .iter()
            .map(|item| {
                if item.benefit < Decimal::ZERO {
                    return Err(SolveError::InvalidBenefit {
                        benefit: item.benefit,
                    });
                }
                money::quantize(item.cost)
            })
            .collect::<Result<Vec<Cents>>>()?;

        if items.is_empty() || capacity == 0 {
            return Ok(DpResult::empty(capacity));
        }

        let n = items.len();
        let cells = n as u64 * (capacity as u64 + 1);
        if cells > config.max_decision_cells {
            return Err(SolveError::CapacityOverflow {
                required: cells,
                limit: config.max_decision_cells,
            });
        }

        tracing::debug!(
            "dp solve: {} items, capacity {} cents, {} decision cells",
            n,
            capacity,
            cells
        );

        // Processing order over item indices. The optional descending
        // benefit/cost pre-sort is a locality heuristic only; compared
        // by exact cross-multiplication (costs are positive), with the
        // original index as a deterministic tie-break.
        let mut order: Vec<usize> = (0..n).collect();
        if config.ratio_presort {
            order.sort_by(|&a, &b| {
                let lhs = items[b].benefit * items[a].cost;
                let rhs = items[a].benefit * items[b].cost;
                lhs.cmp(&rhs).then_with(|| a.cmp(&b))
            });
        }

        let cap = capacity as usize;

        // dp[w] = best achievable benefit spending at most w cents.
        let mut dp = vec![Decimal::ZERO; cap + 1];

        // Flat n × (cap + 1) buffer: decision[i * (cap + 1) + w] is
        // true when the i-th processed item was newly included on the
        // way to spend w. Retained only until backtracking completes.
        let mut decision = vec![false; cells as usize];

        for (i, &idx) in order.iter().enumerate() {
            let cost = costs[idx] as usize;
            if cost > cap {
                // Oversized for the whole budget: never selectable.
                continue;
            }
            let benefit = items[idx].benefit;
            let row = i * (cap + 1);
            for w in (cost..=cap).rev() {
                let candidate = dp[w - cost] + benefit;
                if candidate > dp[w] {
                    dp[w] = candidate;
                    decision[row + w] = true;
                }
            }
        }

        // The optimum may spend less than the full budget, so the
        // whole final row is searched. `>=` keeps the largest spend
        // on value ties.
        let mut best_w = 0;
        for w in 0..=cap {
            if dp[w] >= dp[best_w] {
                best_w = w;
            }
        }

        tracing::debug!("dp optimum {} from capacity index {}", dp[best_w], best_w);

        // Backtrack in reverse processing order, then restore the
        // original presentation order by index.
        let mut chosen: Vec<usize> = Vec::new();
        let mut w = best_w;
        for i in (0..n).rev() {
            if decision[i * (cap + 1) + w] {
                let idx = order[i];
                chosen.push(idx);
                w -= costs[idx] as usize;
            }
        }
        chosen.sort_unstable();
        let spent = (best_w - w) as Cents;

        let selection = Selection::new(chosen.into_iter().map(|i| items[i].clone()).collect());
        Ok(DpResult {
            selection,
            capacity,
            spent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn item(id: &str, cost: &str, benefit: &str) -> Item {
        Item::new(id, d(cost), d(benefit)).unwrap()
    }

    fn abc() -> Vec<Item> {
        vec![
            item("A", "100", "50"),
            item("B", "200", "140"),
            item("C", "300", "180"),
        ]
    }

    #[test]
    fn test_concrete_scenario() {
        // {B, C} beats {A, C} (230) and {A, B} (190) under budget 500.
        let result = DpRunner::run(&abc(), d("500"), &DpConfig::default()).unwrap();
        let sel = &result.selection;
        assert_eq!(sel.total_benefit(), d("320"));
        assert_eq!(sel.total_cost(), d("500"));
        assert_eq!(sel.len(), 2);
        assert!(sel.contains("B"));
        assert!(sel.contains("C"));
        assert!(!sel.contains("A"));
        assert_eq!(result.spent, 50_000);
    }

    #[test]
    fn test_empty_items() {
        let result = DpRunner::run(&[], d("500"), &DpConfig::default()).unwrap();
        assert!(result.selection.is_empty());
        assert_eq!(result.selection.total_cost(), Decimal::ZERO);
        assert_eq!(result.selection.total_benefit(), Decimal::ZERO);
    }

    #[test]
    fn test_zero_budget() {
        let result = DpRunner::run(&abc(), Decimal::ZERO, &DpConfig::default()).unwrap();
        assert!(result.selection.is_empty());
        assert_eq!(result.capacity, 0);
    }

    #[test]
    fn test_oversized_item_never_selected() {
        let items = vec![item("big", "600", "1000"), item("ok", "100", "10")];
        let result = DpRunner::run(&items, d("500"), &DpConfig::default()).unwrap();
        assert!(!result.selection.contains("big"));
        assert!(result.selection.contains("ok"));
    }

    #[test]
    fn test_optimum_may_underspend() {
        // Nothing fills the budget exactly; the best spend is 300.
        let items = vec![item("A", "300", "100"), item("B", "300", "90")];
        let result = DpRunner::run(&items, d("500"), &DpConfig::default()).unwrap();
        assert_eq!(result.selection.total_benefit(), d("100"));
        assert_eq!(result.spent, 30_000);
    }

    #[test]
    fn test_value_tie_is_deterministic() {
        // Both subsets reach benefit 5. The backtrack starts from the
        // largest capacity index achieving the optimum, and the cell
        // update is strict, so the first-processed item owns the tied
        // cell: the result is fixed, not input-dependent.
        let items = vec![item("cheap", "2", "5"), item("dear", "3", "5")];
        let result = DpRunner::run(&items, d("3"), &DpConfig::default()).unwrap();
        assert_eq!(result.selection.total_benefit(), d("5"));
        assert_eq!(result.selection.total_cost(), d("2"));
        assert!(result.selection.contains("cheap"));
        assert_eq!(result.spent, 200);
    }

    #[test]
    fn test_selection_keeps_input_order() {
        let items = vec![
            item("z", "100", "10"),
            item("m", "100", "10"),
            item("a", "100", "10"),
        ];
        let result = DpRunner::run(&items, d("300"), &DpConfig::default()).unwrap();
        let ids: Vec<&str> = result.selection.items().iter().map(|it| it.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "m", "a"]);
    }

    #[test]
    fn test_ratio_presort_same_optimum() {
        let plain = DpRunner::run(&abc(), d("500"), &DpConfig::default()).unwrap();
        let presorted = DpRunner::run(
            &abc(),
            d("500"),
            &DpConfig::default().with_ratio_presort(true),
        )
        .unwrap();
        assert_eq!(
            plain.selection.total_benefit(),
            presorted.selection.total_benefit()
        );
        assert!(presorted.selection.total_cost() <= d("500"));
    }

    #[test]
    fn test_presort_keeps_input_order_in_selection() {
        let items = vec![item("low", "100", "10"), item("high", "100", "90")];
        let result = DpRunner::run(
            &items,
            d("200"),
            &DpConfig::default().with_ratio_presort(true),
        )
        .unwrap();
        let ids: Vec<&str> = result.selection.items().iter().map(|it| it.id.as_str()).collect();
        assert_eq!(ids, vec!["low", "high"]);
    }

    #[test]
    fn test_capacity_overflow() {
        let err = DpRunner::run(
            &abc(),
            d("500"),
            &DpConfig::default().with_max_capacity(10_000),
        )
        .unwrap_err();
        assert!(matches!(err, SolveError::CapacityOverflow { .. }));
    }

    #[test]
    fn test_decision_cell_ceiling() {
        let err = DpRunner::run(
            &abc(),
            d("500"),
            &DpConfig::default().with_max_decision_cells(1_000),
        )
        .unwrap_err();
        assert!(matches!(err, SolveError::CapacityOverflow { .. }));
    }

    #[test]
    fn test_defends_against_invalid_cost() {
        // Raw construction bypasses Item::new; the solver must reject,
        // not misbehave.
        let items = vec![Item {
            id: "bad".into(),
            cost: Decimal::ZERO,
            benefit: d("10"),
        }];
        let err = DpRunner::run(&items, d("500"), &DpConfig::default()).unwrap_err();
        assert!(matches!(err, SolveError::InvalidCost { .. }));
    }

    #[test]
    fn test_defends_against_negative_benefit() {
        let items = vec![Item {
            id: "bad".into(),
            cost: d("10"),
            benefit: d("-1"),
        }];
        let err = DpRunner::run(&items, d("500"), &DpConfig::default()).unwrap_err();
        assert!(matches!(err, SolveError::InvalidBenefit { .. }));
    }

    #[test]
    fn test_negative_budget_rejected() {
        let err = DpRunner::run(&abc(), d("-1"), &DpConfig::default()).unwrap_err();
        assert!(matches!(err, SolveError::InvalidBudget { .. }));
    }

    #[test]
    fn test_fractional_cents() {
        // 2.50 + 2.50 fits budget 5.00 exactly in cent space.
        let items = vec![item("x", "2.50", "3"), item("y", "2.50", "4")];
        let result = DpRunner::run(&items, d("5.00"), &DpConfig::default()).unwrap();
        assert_eq!(result.selection.total_benefit(), d("7"));
        assert_eq!(result.selection.total_cost(), d("5.00"));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn arb_items(max_n: usize) -> impl Strategy<Value = Vec<Item>> {
            prop::collection::vec((1u32..=50, 0u32..=100), 0..=max_n).prop_map(|specs| {
                specs
                    .into_iter()
                    .enumerate()
                    .map(|(i, (cost, benefit))| {
                        Item::new(
                            format!("it{i}"),
                            Decimal::from(cost),
                            Decimal::from(benefit),
                        )
                        .unwrap()
                    })
                    .collect()
            })
        }

        proptest! {
            #[test]
            fn prop_budget_never_exceeded(
                items in arb_items(12),
                budget in 0u32..=150,
            ) {
                let budget = Decimal::from(budget);
                let result =
                    DpRunner::run(&items, budget, &DpConfig::default()).unwrap();
                prop_assert!(result.selection.total_cost() <= budget);
            }

            #[test]
            fn prop_order_independent_optimum(
                (items, shuffled) in arb_items(10)
                    .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
                budget in 0u32..=150,
            ) {
                let budget = Decimal::from(budget);
                let config = DpConfig::default();
                let a = DpRunner::run(&items, budget, &config).unwrap();
                let b = DpRunner::run(&shuffled, budget, &config).unwrap();
                prop_assert_eq!(
                    a.selection.total_benefit(),
                    b.selection.total_benefit()
                );
                prop_assert!(b.selection.total_cost() <= budget);
            }

            #[test]
            fn prop_presort_preserves_optimum(
                items in arb_items(10),
                budget in 0u32..=150,
            ) {
                let budget = Decimal::from(budget);
                let plain =
                    DpRunner::run(&items, budget, &DpConfig::default()).unwrap();
                let sorted = DpRunner::run(
                    &items,
                    budget,
                    &DpConfig::default().with_ratio_presort(true),
                )
                .unwrap();
                prop_assert_eq!(
                    plain.selection.total_benefit(),
                    sorted.selection.total_benefit()
                );
            }
        }
    }
}
