//! Time sources for snowflake generation
//!
//! Provides wall-clock time in whole seconds since the Unix epoch

use chrono::Utc;

/// A source of wall-clock seconds since the Unix epoch.
///
/// Any `Fn() -> i64` closure is a clock, which lets tests drive a generator
/// through arbitrary sequences of readings.
pub trait Clock {
    fn now_secs(&self) -> i64;
}

/// The system wall clock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline(always)]
    fn now_secs(&self) -> i64 {
        unix_time_secs()
    }
}

impl<F> Clock for F
where
    F: Fn() -> i64,
{
    #[inline(always)]
    fn now_secs(&self) -> i64 {
        self()
    }
}

/// Get current wall-clock time in seconds since Unix epoch
#[inline(always)]
pub fn unix_time_secs() -> i64 {
    Utc::now().timestamp()
}
