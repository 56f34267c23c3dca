//! Error types for knapsack-exact.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for solver operations.
///
/// Every error is surfaced to the caller; nothing in this crate
/// catches-and-ignores, and no partial selection is ever returned
/// alongside an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// An item's cost is non-positive, rounds to zero cents, or
    /// exceeds the quantization ceiling.
    #[error("cost {cost} is outside the quantizable range (0.00, {max}]")]
    InvalidCost {
        /// The offending cost.
        cost: Decimal,
        /// The configured quantization ceiling.
        max: Decimal,
    },

    /// An item's benefit is negative.
    #[error("benefit {benefit} is negative")]
    InvalidBenefit {
        /// The offending benefit.
        benefit: Decimal,
    },

    /// The budget is negative or exceeds the quantization ceiling.
    #[error("budget {budget} is outside the quantizable range [0.00, {max}]")]
    InvalidBudget {
        /// The offending budget.
        budget: Decimal,
        /// The configured quantization ceiling.
        max: Decimal,
    },

    /// The quantized budget would require DP tables larger than the
    /// configured ceiling. Fatal to this invocation only.
    #[error("solve would need {required} table cells, above the configured ceiling {limit}")]
    CapacityOverflow {
        /// Cells the solve would need.
        required: u64,
        /// The configured maximum.
        limit: u64,
    },

    /// The exhaustive search exceeded its wall-clock deadline.
    ///
    /// Recoverable: the caller may retry with a longer timeout or
    /// switch to the DP solver.
    #[error("exhaustive search exceeded its wall-clock deadline")]
    Timeout,
}

/// Result type alias for solver operations.
pub type Result<T> = std::result::Result<T, SolveError>;
