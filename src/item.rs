//! Candidate item model.

use crate::error::{Result, SolveError};
use crate::money;
use rust_decimal::Decimal;

/// One candidate investment: an indivisible purchase with a cost and
/// an expected benefit.
///
/// Identity is the `id` field, never a positional index — solvers may
/// reorder items internally, but always report selections in terms of
/// the original items.
///
/// Fields are public so data loaders can build items directly; the
/// `cost > 0` and `benefit >= 0` invariants belong to the loader, and
/// both solvers re-check them defensively before solving.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Stable identity (e.g., a ticker or CSV `name` column).
    pub id: String,

    /// Purchase cost in the budget's currency. Must be positive.
    pub cost: Decimal,

    /// Expected benefit in the same currency. Must be non-negative.
    pub benefit: Decimal,
}

impl Item {
    /// Creates a validated item.
    pub fn new(id: impl Into<String>, cost: Decimal, benefit: Decimal) -> Result<Self> {
        if cost <= Decimal::ZERO {
            return Err(SolveError::InvalidCost {
                cost,
                max: money::max_amount(),
            });
        }
        if benefit < Decimal::ZERO {
            return Err(SolveError::InvalidBenefit { benefit });
        }
        Ok(Self {
            id: id.into(),
            cost,
            benefit,
        })
    }

    /// Benefit per unit of cost, used by the optional pre-sort
    /// heuristic. Returns zero for a (invalid) zero cost instead of
    /// panicking.
    pub fn ratio(&self) -> Decimal {
        self.benefit.checked_div(self.cost).unwrap_or(Decimal::ZERO)
    }
}
