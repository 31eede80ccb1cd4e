//! Wait and backoff strategies for sequence exhaustion and clock regression
//!
//! Sleeps with exponential backoff, bounded by a total wait budget

use std::thread;
use std::time::Duration;

use tracing::trace;

/// Maximum backoff duration in milliseconds
pub const MAX_BACKOFF_MS: u64 = 100;

/// Exponential backoff that gives up once `budget` has been slept
#[derive(Debug)]
pub struct Backoff {
    step_ms: u64,
    slept: Duration,
    budget: Duration,
}

impl Backoff {
    pub fn new(budget: Duration) -> Self {
        Self {
            step_ms: 1,
            slept: Duration::ZERO,
            budget,
        }
    }

    /// Sleep for the next backoff step.
    ///
    /// Returns `false` without sleeping once the budget is spent.
    pub fn snooze(&mut self) -> bool {
        let remaining = self.budget.saturating_sub(self.slept);
        if remaining.is_zero() {
            return false;
        }

        let pause = Duration::from_millis(self.step_ms).min(remaining);
        trace!(pause_ms = pause.as_millis() as u64, "waiting for clock");
        thread::sleep(pause);

        self.slept += pause;
        self.step_ms = next_backoff(self.step_ms);
        true
    }

    pub fn slept(&self) -> Duration {
        self.slept
    }
}

/// Calculate next backoff duration with exponential growth capped at MAX_BACKOFF_MS
#[inline(always)]
pub const fn next_backoff(current: u64) -> u64 {
    let next = current.saturating_mul(2);
    if next > MAX_BACKOFF_MS {
        MAX_BACKOFF_MS
    } else {
        next
    }
}
