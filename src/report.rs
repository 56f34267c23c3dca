//! Derived aggregates over a selection.

use crate::selection::Selection;
use rust_decimal::Decimal;

/// Pure aggregation over a [`Selection`], ready for display or
/// logging by external collaborators. The core itself performs no I/O.
///
/// Percentages use the conventional ×100 scale: a selection spending
/// the whole budget has `budget_utilization_pct == 100`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionReport {
    /// Sum of chosen item costs.
    pub total_cost: Decimal,

    /// Sum of chosen item benefits.
    pub total_benefit: Decimal,

    /// `total_cost / budget × 100`, or zero for a zero budget.
    pub budget_utilization_pct: Decimal,

    /// `total_benefit / total_cost × 100`, or zero when nothing was
    /// spent.
    pub yield_pct: Decimal,

    /// Number of chosen items.
    pub item_count: usize,
}

impl Selection {
    /// Computes the report for this selection against the budget it
    /// was solved under.
    pub fn report(&self, budget: Decimal) -> SelectionReport {
        let pct = |num: Decimal, den: Decimal| {
            num.checked_div(den).unwrap_or(Decimal::ZERO) * Decimal::ONE_HUNDRED
        };
        SelectionReport {
            total_cost: self.total_cost(),
            total_benefit: self.total_benefit(),
            budget_utilization_pct: pct(self.total_cost(), budget),
            yield_pct: pct(self.total_benefit(), self.total_cost()),
            item_count: self.len(),
        }
    }
}
