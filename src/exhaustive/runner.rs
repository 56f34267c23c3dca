//! Subset enumeration with a wall-clock deadline.

use super::config::ExhaustiveConfig;
use crate::error::{Result, SolveError};
use crate::item::Item;
use crate::money;
use crate::selection::Selection;
use rust_decimal::Decimal;
use std::time::{Duration, Instant};

/// Result of an exhaustive solve that finished within its deadline.
#[derive(Debug, Clone)]
pub struct ExhaustiveResult {
    /// The best selection found, in original input order.
    pub selection: Selection,

    /// Number of enumeration steps taken (include/exclude branches).
    pub subsets_examined: u64,

    /// Wall-clock time the enumeration took.
    pub elapsed: Duration,
}

/// Executes the brute-force search.
pub struct ExhaustiveRunner;

impl ExhaustiveRunner {
    /// Enumerates all subsets of `items` under `budget`, aborting
    /// with [`SolveError::Timeout`] once `config.timeout` elapses.
    pub fn run(items: &[Item], budget: Decimal, config: &ExhaustiveConfig) -> Result<ExhaustiveResult> {
        let deadline = Instant::now() + config.timeout;
        Self::run_until(items, budget, deadline, config)
    }

    /// Same as [`run`](Self::run), but against an explicit deadline.
    ///
    /// The deadline is an ordinary parameter rather than ambient
    /// process time, so tests can inject an already-expired instant
    /// and get a deterministic timeout.
    pub fn run_until(
        items: &[Item],
        budget: Decimal,
        deadline: Instant,
        config: &ExhaustiveConfig,
    ) -> Result<ExhaustiveResult> {
        if budget < Decimal::ZERO {
            return Err(SolveError::InvalidBudget {
                budget,
                max: money::max_amount(),
            });
        }
        for item in items {
            if item.cost <= Decimal::ZERO {
                return Err(SolveError::InvalidCost {
                    cost: item.cost,
                    max: money::max_amount(),
                });
            }
            if item.benefit < Decimal::ZERO {
                return Err(SolveError::InvalidBenefit {
                    benefit: item.benefit,
                });
            }
        }

        tracing::debug!(
            "exhaustive solve: {} items (2^{} subsets), budget {}",
            items.len(),
            items.len(),
            budget
        );

        let started = Instant::now();
        let mut search = Search {
            items,
            budget,
            deadline,
            poll_interval: u64::from(config.poll_interval),
            steps: 0,
            // The defined floor: an empty selection with zero benefit,
            // even when no single item fits the budget.
            best_benefit: Decimal::ZERO,
            best: Vec::new(),
            current: Vec::new(),
        };
        search.visit(0, Decimal::ZERO, Decimal::ZERO)?;

        let chosen = search
            .best
            .iter()
            .map(|&i| items[i].clone())
            .collect::<Vec<Item>>();
        Ok(ExhaustiveResult {
            selection: Selection::new(chosen),
            subsets_examined: search.steps,
            elapsed: started.elapsed(),
        })
    }
}

struct Search<'a> {
    items: &'a [Item],
    budget: Decimal,
    deadline: Instant,
    poll_interval: u64,
    steps: u64,
    best_benefit: Decimal,
    best: Vec<usize>,
    current: Vec<usize>,
}

impl Search<'_> {
    /// Depth-first include/exclude walk from item `i`, with the
    /// running totals of the partial subset in `current`.
    ///
    /// The include branch is pruned when it would break the budget,
    /// which skips only infeasible subsets and so cannot change the
    /// optimum. The best subset is replaced on strictly greater
    /// benefit only: the first one found in this deterministic order
    /// wins exact ties.
    fn visit(&mut self, i: usize, cost: Decimal, benefit: Decimal) -> Result<()> {
        self.steps += 1;
        if self.steps % self.poll_interval == 0 && Instant::now() >= self.deadline {
            return Err(SolveError::Timeout);
        }

        if i == self.items.len() {
            if benefit > self.best_benefit {
                self.best_benefit = benefit;
                self.best = self.current.clone();
            }
            return Ok(());
        }

        let with_cost = cost + self.items[i].cost;
        if with_cost <= self.budget {
            self.current.push(i);
            self.visit(i + 1, with_cost, benefit + self.items[i].benefit)?;
            self.current.pop();
        }
        self.visit(i + 1, cost, benefit)
    }
}
