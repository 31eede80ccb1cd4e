//! Core snowflake generator implementation
//!
//! Split into modules for testability:
//! - `state` - Last observed second + sequence, as a pure state machine
//! - `time` - Wall-clock time sources
//! - `wait` - Backoff for the waiting policies
//! - `generate` - ID generation logic
//! - `shared` - Mutex-guarded generator for use across threads

mod generate;
mod shared;
mod state;
mod time;
mod wait;

use tracing::debug;

use crate::codec::MAX_WORKER_ID;
use crate::config::GeneratorConfig;
use crate::error::SnowflakeError;
use crate::snowflake::Snowflake;

pub use shared::SharedGenerator;
pub use time::{Clock, SystemClock};

use state::State;

/// Snowflake generator for one worker.
///
/// `next` takes `&mut self`: a generator has a single owner. Use
/// [`SharedGenerator`] to hand out ids for one worker from several threads.
#[derive(Debug)]
pub struct Generator<C = SystemClock> {
    state: State,
    last: Option<Snowflake>,
    worker_id: u16,
    config: GeneratorConfig,
    clock: C,
}

impl Generator<SystemClock> {
    /// Create a generator for `worker_id`, counting seconds from `epoch`
    /// (seconds since the Unix epoch)
    pub fn new(epoch: i64, worker_id: u16) -> Result<Self, SnowflakeError> {
        let config = GeneratorConfig::builder().epoch(epoch)?.build();
        Self::with_config(worker_id, config)
    }

    /// Create with custom configuration
    pub fn with_config(worker_id: u16, config: GeneratorConfig) -> Result<Self, SnowflakeError> {
        Self::with_clock(worker_id, config, SystemClock)
    }
}

impl<C: Clock> Generator<C> {
    /// Create with custom configuration and time source
    pub fn with_clock(
        worker_id: u16,
        config: GeneratorConfig,
        clock: C,
    ) -> Result<Self, SnowflakeError> {
        Self::validate_worker_id(worker_id)?;
        debug!(
            worker_id,
            epoch = config.epoch(),
            sequence_policy = ?config.sequence_policy(),
            clock_policy = ?config.clock_policy(),
            "snowflake generator created"
        );
        Ok(Self {
            state: State::default(),
            last: None,
            worker_id,
            config,
            clock,
        })
    }

    fn validate_worker_id(worker_id: u16) -> Result<(), SnowflakeError> {
        if worker_id > MAX_WORKER_ID {
            return Err(SnowflakeError::InvalidWorkerId {
                worker_id,
                max: MAX_WORKER_ID,
            });
        }
        Ok(())
    }

    /// The most recently generated id, if any
    #[inline(always)]
    pub const fn last(&self) -> Option<Snowflake> {
        self.last
    }

    #[inline(always)]
    pub const fn worker_id(&self) -> u16 {
        self.worker_id
    }

    /// Epoch in seconds since the Unix epoch
    #[inline(always)]
    pub const fn epoch(&self) -> i64 {
        self.config.epoch()
    }

    #[inline(always)]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    #[inline(always)]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
