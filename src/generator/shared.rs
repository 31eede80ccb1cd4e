//! Generator shared between threads
//!
//! The whole read-modify-write of one `next` call runs under a single lock,
//! so two threads can never observe the same state and issue the same id.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::time::{Clock, SystemClock};
use super::Generator;
use crate::config::GeneratorConfig;
use crate::error::SnowflakeError;
use crate::snowflake::Snowflake;

/// A [`Generator`] behind a mutex, usable through `&self`
#[derive(Debug)]
pub struct SharedGenerator<C = SystemClock> {
    inner: Mutex<Generator<C>>,
}

impl SharedGenerator<SystemClock> {
    /// Create a shared generator for `worker_id`, counting seconds from `epoch`
    pub fn new(epoch: i64, worker_id: u16) -> Result<Self, SnowflakeError> {
        Generator::new(epoch, worker_id).map(Self::from)
    }

    /// Create with custom configuration
    pub fn with_config(worker_id: u16, config: GeneratorConfig) -> Result<Self, SnowflakeError> {
        Generator::with_config(worker_id, config).map(Self::from)
    }
}

impl<C: Clock> SharedGenerator<C> {
    /// Create with custom configuration and time source
    pub fn with_clock(
        worker_id: u16,
        config: GeneratorConfig,
        clock: C,
    ) -> Result<Self, SnowflakeError> {
        Generator::with_clock(worker_id, config, clock).map(Self::from)
    }

    /// Generate the next snowflake. See [`Generator::next`].
    ///
    /// With a waiting policy the lock is held while waiting, so other callers
    /// queue behind it.
    pub fn next(&self) -> Result<Snowflake, SnowflakeError> {
        self.lock().next()
    }

    /// The most recently generated id, by any thread
    pub fn last(&self) -> Option<Snowflake> {
        self.lock().last()
    }

    pub fn worker_id(&self) -> u16 {
        self.lock().worker_id()
    }

    pub fn epoch(&self) -> i64 {
        self.lock().epoch()
    }

    pub fn into_inner(self) -> Generator<C> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // State is only written after an id is fully built, so a poisoned lock
    // still guards a consistent generator.
    fn lock(&self) -> MutexGuard<'_, Generator<C>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C> From<Generator<C>> for SharedGenerator<C> {
    fn from(generator: Generator<C>) -> Self {
        Self {
            inner: Mutex::new(generator),
        }
    }
}
