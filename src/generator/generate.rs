//! ID generation logic
//!
//! Core next() implementation: one clock read on the fast path, a bounded
//! backoff loop when a waiting policy applies

use tracing::{instrument, warn};

use super::state::Transition;
use super::time::Clock;
use super::wait::Backoff;
use super::Generator;
use crate::codec::Field;
use crate::config::{ClockPolicy, SequencePolicy};
use crate::error::SnowflakeError;
use crate::snowflake::Snowflake;

/// Outcome of one attempt at generating an id
#[derive(Debug)]
pub(crate) enum Poll {
    Ready(Snowflake),
    /// Retry once the clock moves; the error is what the caller gets if the
    /// wait budget runs out first
    Pending(SnowflakeError),
}

impl<C: Clock> Generator<C> {
    /// Generate the next snowflake.
    ///
    /// Within one second the sequence counts up from 0; the first call in a
    /// new second starts over at 0.
    ///
    /// # Errors
    ///
    /// - [`SnowflakeError::FieldOverflow`] when the clock reads before the
    ///   epoch or more than `MAX_TIMESTAMP` seconds after it.
    /// - [`SnowflakeError::SequenceExhausted`] and
    ///   [`SnowflakeError::ClockMovedBackwards`] according to the configured
    ///   policies. The waiting policies return them once `max_wait` runs out.
    #[allow(clippy::should_implement_trait)] // fallible, so not an `Iterator`
    #[instrument(level = "trace", skip(self), fields(worker_id = self.worker_id))]
    pub fn next(&mut self) -> Result<Snowflake, SnowflakeError> {
        let mut backoff = None;

        loop {
            let now = self.clock.now_secs();
            match self.poll(now)? {
                Poll::Ready(id) => return Ok(id),
                Poll::Pending(err) => {
                    let backoff =
                        backoff.get_or_insert_with(|| Backoff::new(self.config.max_wait()));
                    if !backoff.snooze() {
                        warn!(
                            worker_id = self.worker_id,
                            waited_ms = backoff.slept().as_millis() as u64,
                            error = %err,
                            "gave up waiting for clock"
                        );
                        return Err(err);
                    }
                }
            }
        }
    }

    /// Apply one clock reading to the state. Leaves the state untouched
    /// unless an id is issued.
    pub(crate) fn poll(&mut self, now: i64) -> Result<Poll, SnowflakeError> {
        let elapsed = now.saturating_sub(self.config.epoch());
        Field::Timestamp.check(elapsed)?;

        let sequence = match self.state.transition(now) {
            Transition::NewSecond => 0,
            Transition::SameSecond { sequence } => sequence,
            Transition::Exhausted => {
                let err = SnowflakeError::SequenceExhausted { timestamp: elapsed };
                match self.config.sequence_policy() {
                    SequencePolicy::Fail => return Err(err),
                    SequencePolicy::Wait => return Ok(Poll::Pending(err)),
                    SequencePolicy::Wrap => {
                        warn!(
                            worker_id = self.worker_id,
                            timestamp = elapsed,
                            "sequence wrapped within one second, ids will repeat"
                        );
                        0
                    }
                }
            }
            Transition::Behind { last } => {
                let err = SnowflakeError::ClockMovedBackwards { last, now };
                match self.config.clock_policy() {
                    ClockPolicy::Fail => return Err(err),
                    ClockPolicy::Wait => return Ok(Poll::Pending(err)),
                    ClockPolicy::Reset => {
                        warn!(
                            worker_id = self.worker_id,
                            last,
                            now,
                            "clock moved backwards, restarting sequence"
                        );
                        0
                    }
                }
            }
        };

        self.state.commit(now, sequence);
        let id = Snowflake::new(elapsed, self.worker_id, sequence);
        self.last = Some(id);
        Ok(Poll::Ready(id))
    }
}
