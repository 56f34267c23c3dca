//! Solver output: the chosen subset and its totals.

use crate::item::Item;
use rust_decimal::Decimal;

/// The subset of items chosen by a solver, with its cost and benefit
/// totals computed once at construction.
///
/// A selection is produced fresh per solve call and never aliases or
/// mutates the caller's items. Items appear in their original input
/// order regardless of any internal reordering the solver applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    items: Vec<Item>,
    total_cost: Decimal,
    total_benefit: Decimal,
}

impl Selection {
    /// Builds a selection from chosen items, summing totals exactly.
    pub(crate) fn new(items: Vec<Item>) -> Self {
        let total_cost = items.iter().map(|it| it.cost).sum();
        let total_benefit = items.iter().map(|it| it.benefit).sum();
        Self {
            items,
            total_cost,
            total_benefit,
        }
    }

    /// The empty selection: zero cost, zero benefit.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The chosen items, in original input order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of chosen items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no item was chosen.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of chosen item costs.
    pub fn total_cost(&self) -> Decimal {
        self.total_cost
    }

    /// Sum of chosen item benefits.
    pub fn total_benefit(&self) -> Decimal {
        self.total_benefit
    }

    /// Whether an item with the given id was chosen.
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|it| it.id == id)
    }
}
