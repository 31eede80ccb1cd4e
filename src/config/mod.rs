//! Configuration for the snowflake generator

mod builder;

use std::time::Duration;

use builder::DEFAULT_MAX_WAIT;
pub use builder::{GeneratorConfigBuilder, DEFAULT_EPOCH};

/// What the generator does when more than `MAX_SEQUENCE + 1` ids are
/// requested within one second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequencePolicy {
    /// Return [`SnowflakeError::SequenceExhausted`](crate::SnowflakeError::SequenceExhausted)
    #[default]
    Fail,
    /// Block until the clock reaches the next second, up to `max_wait`
    Wait,
    /// Wrap the sequence back to 0 within the same second.
    ///
    /// The resulting id repeats an earlier one. Only for callers that do not
    /// need uniqueness.
    Wrap,
}

/// What the generator does when the clock reads earlier than on the
/// previous call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockPolicy {
    /// Return [`SnowflakeError::ClockMovedBackwards`](crate::SnowflakeError::ClockMovedBackwards)
    #[default]
    Fail,
    /// Block until the clock catches up, up to `max_wait`
    Wait,
    /// Treat the earlier reading as a new second and restart the sequence.
    ///
    /// Ids may collide with or sort below ids already handed out.
    Reset,
}

/// Configuration for the snowflake generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    epoch: i64,
    sequence_policy: SequencePolicy,
    clock_policy: ClockPolicy,
    max_wait: Duration,
}

impl GeneratorConfig {
    fn new(epoch: i64) -> Self {
        Self {
            epoch,
            sequence_policy: SequencePolicy::default(),
            clock_policy: ClockPolicy::default(),
            max_wait: DEFAULT_MAX_WAIT,
        }
    }

    /// Create config from builder
    pub(crate) fn from_builder(b: GeneratorConfigBuilder) -> Self {
        let mut cfg = Self::new(b.epoch);
        cfg.sequence_policy = b.sequence_policy;
        cfg.clock_policy = b.clock_policy;
        cfg.max_wait = b.max_wait;
        cfg
    }

    /// Create a new configuration builder
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Epoch in seconds since the Unix epoch
    #[inline(always)]
    pub const fn epoch(&self) -> i64 {
        self.epoch
    }

    #[inline(always)]
    pub const fn sequence_policy(&self) -> SequencePolicy {
        self.sequence_policy
    }

    #[inline(always)]
    pub const fn clock_policy(&self) -> ClockPolicy {
        self.clock_policy
    }

    #[inline(always)]
    pub const fn max_wait(&self) -> Duration {
        self.max_wait
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EPOCH)
    }
}
