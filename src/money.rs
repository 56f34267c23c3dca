//! Monetary quantization.
//!
//! Converts decimal amounts into integer cents so the DP tables can be
//! indexed exactly, with no floating-point drift in budget
//! comparisons. Rounding is half-away-from-zero on `amount × 100`,
//! which avoids systematically underestimating costs.

use crate::error::{Result, SolveError};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Integer amount in the smallest currency unit.
pub type Cents = u32;

/// Largest amount the quantizer accepts, in cents (1 000 000.00).
///
/// Guards the capacity-indexed arrays against pathological inputs
/// (e.g., budgets in the billions) before any allocation happens.
pub const MAX_AMOUNT_CENTS: Cents = 100_000_000;

/// The quantization ceiling as a display amount.
pub fn max_amount() -> Decimal {
    Decimal::new(MAX_AMOUNT_CENTS as i64, 2)
}

/// Rounds `amount × 100` half-away-from-zero into whole cents.
/// Returns `None` when the result does not fit the accepted range.
fn to_cents(amount: Decimal) -> Option<Cents> {
    let scaled = (amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let cents = scaled.to_u32()?;
    (cents <= MAX_AMOUNT_CENTS).then_some(cents)
}

/// Quantizes an item cost into cents.
///
/// Fails with [`SolveError::InvalidCost`] when the cost is
/// non-positive, rounds to zero cents (a zero-cent item would be free
/// in capacity space, breaking the `cost > 0` invariant), or exceeds
/// [`MAX_AMOUNT_CENTS`].
pub fn quantize(cost: Decimal) -> Result<Cents> {
    let invalid = || SolveError::InvalidCost {
        cost,
        max: max_amount(),
    };
    if cost <= Decimal::ZERO {
        return Err(invalid());
    }
    let cents = to_cents(cost).ok_or_else(invalid)?;
    if cents == 0 {
        return Err(invalid());
    }
    Ok(cents)
}

/// Quantizes a budget into a DP capacity in cents.
///
/// Identical to [`quantize`] except that zero is permitted: a budget
/// that quantizes to 0 is a valid terminal case (empty selection),
/// not an error.
pub fn quantize_budget(budget: Decimal) -> Result<Cents> {
    if budget < Decimal::ZERO {
        return Err(SolveError::InvalidBudget {
            budget,
            max: max_amount(),
        });
    }
    to_cents(budget).ok_or(SolveError::InvalidBudget {
        budget,
        max: max_amount(),
    })
}

/// Converts cents back to the 2-decimal display representation.
///
/// `dequantize(quantize(x)?)` equals `x` rounded to 2 decimals with
/// the same half-away-from-zero strategy.
pub fn dequantize(cents: Cents) -> Decimal {
    Decimal::new(cents as i64, 2)
}
