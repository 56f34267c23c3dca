//! Exact 0/1 knapsack by dynamic programming.
//!
//! Builds a capacity-indexed value table over integer cents, together
//! with a per-item decision table used to reconstruct the optimal
//! subset by backtracking. Pseudo-polynomial: `O(n × capacity)` time
//! and space, tractable because capacity is bounded by a realistic
//! monetary budget in cents, not by item count.
//!
//! This is the production path; the [`crate::exhaustive`] solver
//! exists only as a correctness oracle for small inputs.

mod config;
mod runner;

pub use config::DpConfig;
pub use runner::{DpResult, DpRunner};
