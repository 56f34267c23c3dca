//! Brute-force reference solver.
//!
//! Enumerates every subset of the items and keeps the best one that
//! fits the budget. Exponential in the item count, so it is only a
//! correctness oracle for small inputs (roughly `n <= 25`), bounded by
//! a wall-clock deadline. Never a production path — that is
//! [`crate::dp`].

mod config;
mod runner;

pub use config::ExhaustiveConfig;
pub use runner::{ExhaustiveResult, ExhaustiveRunner};
