//! Exhaustive solver configuration.

use std::time::Duration;

/// Configuration for the exhaustive solver.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use knapsack_exact::exhaustive::ExhaustiveConfig;
///
/// let config = ExhaustiveConfig::default()
///     .with_timeout(Duration::from_millis(250));
/// ```
#[derive(Debug, Clone)]
pub struct ExhaustiveConfig {
    /// Wall-clock budget for the whole enumeration.
    pub timeout: Duration,

    /// Visited subtrees between deadline checks.
    ///
    /// Lower values tighten timeout latency at the price of more
    /// clock reads; 1 checks on every step.
    pub poll_interval: u32,
}

impl Default for ExhaustiveConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            poll_interval: 1024,
        }
    }
}

impl ExhaustiveConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: u32) -> Self {
        self.poll_interval = interval.max(1);
        self
    }
}
