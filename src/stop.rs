//! # Stop Conditions
//!
//! The only way a running search ends. The driver polls its stop condition
//! once per iteration, before generating a child, and exits the loop as
//! soon as the poll answers `true`.

use std::time::{Duration, Instant};

/// A trait for stop conditions.
///
/// Once `should_stop` has answered `true` it must keep answering `true`
/// for the rest of the run.
pub trait StopCondition {
    /// Polled once per driver iteration.
    fn should_stop(&mut self) -> bool;
}

impl<F> StopCondition for F
where
    F: FnMut() -> bool,
{
    fn should_stop(&mut self) -> bool {
        self()
    }
}

/// Stops the search once a wall-clock budget has elapsed, measured on the
/// monotonic clock from the moment of construction.
#[derive(Debug, Clone)]
pub struct TimeLimit {
    start: Instant,
    budget: Duration,
}

impl TimeLimit {
    pub fn new(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }
}

impl StopCondition for TimeLimit {
    fn should_stop(&mut self) -> bool {
        self.start.elapsed() >= self.budget
    }
}

/// Permits a fixed number of polls to proceed, then stops the search.
///
/// Since the driver polls exactly once per iteration, `IterationLimit::new(n)`
/// bounds a run at n iterations.
#[derive(Debug, Clone)]
pub struct IterationLimit {
    remaining: u64,
}

impl IterationLimit {
    pub fn new(budget: u64) -> Self {
        Self { remaining: budget }
    }
}

impl StopCondition for IterationLimit {
    fn should_stop(&mut self) -> bool {
        if self.remaining == 0 {
            return true;
        }
        self.remaining -= 1;
        false
    }
}
