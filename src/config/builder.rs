//! GeneratorConfig builder for constructing configuration

use std::time::Duration;

use chrono::{DateTime, Utc};

use super::{ClockPolicy, GeneratorConfig, SequencePolicy};
use crate::error::ConfigError;

/// Default configuration values
pub const DEFAULT_EPOCH: i64 = 1_577_836_800; // January 1, 2020 UTC
pub(super) const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(2);

/// Builder for GeneratorConfig
#[derive(Debug, Clone)]
pub struct GeneratorConfigBuilder {
    pub(super) epoch: i64,
    pub(super) sequence_policy: SequencePolicy,
    pub(super) clock_policy: ClockPolicy,
    pub(super) max_wait: Duration,
}

impl GeneratorConfigBuilder {
    /// Create a new GeneratorConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            sequence_policy: SequencePolicy::default(),
            clock_policy: ClockPolicy::default(),
            max_wait: DEFAULT_MAX_WAIT,
        }
    }

    /// Set a custom epoch in seconds since the Unix epoch
    pub fn epoch(mut self, epoch: i64) -> Result<Self, ConfigError> {
        if epoch < 0 {
            return Err(ConfigError::NegativeEpoch { epoch });
        }
        self.epoch = epoch;
        Ok(self)
    }

    /// Set a custom epoch from a calendar instant, dropping sub-second precision
    pub fn epoch_at(self, at: DateTime<Utc>) -> Result<Self, ConfigError> {
        self.epoch(at.timestamp())
    }

    /// Choose what happens once a second's sequence numbers are used up
    pub const fn on_sequence_exhausted(mut self, policy: SequencePolicy) -> Self {
        self.sequence_policy = policy;
        self
    }

    /// Choose what happens when the clock reads earlier than the last call
    pub const fn on_clock_regression(mut self, policy: ClockPolicy) -> Self {
        self.clock_policy = policy;
        self
    }

    /// Upper bound on how long the waiting policies block a single call
    pub const fn max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }

    /// Build the final GeneratorConfig
    pub fn build(self) -> GeneratorConfig {
        GeneratorConfig::from_builder(self)
    }
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
