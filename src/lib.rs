//! Exact 0/1 knapsack optimization for portfolio selection.
//!
//! Selects a subset of indivisible investment items maximizing total
//! benefit under a fixed monetary budget. Two exact solvers:
//!
//! - **DP** ([`dp`]): the production path. Pseudo-polynomial dynamic
//!   programming over integer-quantized cents, with decision-table
//!   backtracking to reconstruct the optimal subset.
//! - **Exhaustive** ([`exhaustive`]): a brute-force oracle over all
//!   subsets, bounded by a wall-clock deadline. For small inputs and
//!   cross-checking only.
//!
//! Supporting modules: [`item`] (the candidate model), [`money`]
//! (decimal-to-cents quantization), [`selection`] and [`report`]
//! (solver output and its derived aggregates), [`error`].
//!
//! # Architecture
//!
//! The crate is the numeric core only: it consumes an already-cleaned
//! item list and a budget, and produces a [`Selection`]. CSV loading,
//! column cleaning, CLI handling, and display belong to callers.
//! Both solvers are synchronous, single-threaded pure functions; all
//! tables live and die within one solve call.
//!
//! # Examples
//!
//! ```
//! use knapsack_exact::{solve, Decimal, Item};
//!
//! let items = vec![
//!     Item::new("A", Decimal::from(100), Decimal::from(50))?,
//!     Item::new("B", Decimal::from(200), Decimal::from(140))?,
//!     Item::new("C", Decimal::from(300), Decimal::from(180))?,
//! ];
//! let selection = solve(&items, Decimal::from(500))?;
//! assert_eq!(selection.total_benefit(), Decimal::from(320));
//! # Ok::<(), knapsack_exact::SolveError>(())
//! ```

pub mod dp;
pub mod error;
pub mod exhaustive;
pub mod item;
pub mod money;
pub mod report;
pub mod selection;

pub use error::{Result, SolveError};
pub use item::Item;
pub use report::SelectionReport;
pub use rust_decimal::Decimal;
pub use selection::Selection;

use dp::{DpConfig, DpRunner};
use exhaustive::{ExhaustiveConfig, ExhaustiveRunner};
use std::time::Duration;

/// Solves with the DP solver under the default configuration.
///
/// Empty items or a zero budget yield an empty selection. Errors per
/// [`SolveError`]: invalid item data or a budget whose quantized
/// capacity exceeds the table ceiling.
pub fn solve(items: &[Item], budget: Decimal) -> Result<Selection> {
    DpRunner::run(items, budget, &DpConfig::default()).map(|r| r.selection)
}

/// Solves with the brute-force oracle, aborting with
/// [`SolveError::Timeout`] once `timeout` elapses.
pub fn solve_exhaustive(items: &[Item], budget: Decimal, timeout: Duration) -> Result<Selection> {
    let config = ExhaustiveConfig::default().with_timeout(timeout);
    ExhaustiveRunner::run(items, budget, &config).map(|r| r.selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::new("A", Decimal::from(100), Decimal::from(50)).unwrap(),
            Item::new("B", Decimal::from(200), Decimal::from(140)).unwrap(),
            Item::new("C", Decimal::from(300), Decimal::from(180)).unwrap(),
        ]
    }

    #[test]
    fn test_solvers_agree_on_scenario() {
        let budget = Decimal::from(500);
        let dp = solve(&items(), budget).unwrap();
        let brute = solve_exhaustive(&items(), budget, Duration::from_secs(5)).unwrap();
        assert_eq!(dp.total_benefit(), brute.total_benefit());
        assert_eq!(dp.total_benefit(), Decimal::from(320));
    }

    #[test]
    fn test_report_surface() {
        let budget = Decimal::from(500);
        let report = solve(&items(), budget).unwrap().report(budget);
        assert_eq!(report.budget_utilization_pct, Decimal::from(100));
        assert_eq!(report.item_count, 2);
    }
}
