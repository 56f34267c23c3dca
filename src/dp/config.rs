//! DP solver configuration.

use crate::money::Cents;

/// Configuration for the DP solver.
///
/// # Examples
///
/// ```
/// use knapsack_exact::dp::DpConfig;
///
/// let config = DpConfig::default()
///     .with_max_capacity(2_000_000)
///     .with_ratio_presort(true);
/// ```
#[derive(Debug, Clone)]
pub struct DpConfig {
    /// Largest accepted quantized budget, in cents.
    ///
    /// The value table holds `capacity + 1` entries; budgets
    /// quantizing above this ceiling are rejected with
    /// `CapacityOverflow` before anything is allocated.
    pub max_capacity: Cents,

    /// Largest accepted decision-table size, in cells
    /// (`n × (capacity + 1)` booleans).
    ///
    /// Bounds total memory when both the item count and the budget
    /// are large.
    pub max_decision_cells: u64,

    /// Process items in descending benefit/cost order.
    ///
    /// Purely a data-locality heuristic: it places high-value items
    /// early in the sweep and never changes the optimal value or the
    /// optimality of the reconstructed set.
    pub ratio_presort: bool,
}

impl Default for DpConfig {
    fn default() -> Self {
        Self {
            max_capacity: 1_000_000,
            max_decision_cells: 256_000_000,
            ratio_presort: false,
        }
    }
}

impl DpConfig {
    pub fn with_max_capacity(mut self, cents: Cents) -> Self {
        self.max_capacity = cents;
        self
    }

    pub fn with_max_decision_cells(mut self, cells: u64) -> Self {
        self.max_decision_cells = cells;
        self
    }

    pub fn with_ratio_presort(mut self, enabled: bool) -> Self {
        self.ratio_presort = enabled;
        self
    }
}
