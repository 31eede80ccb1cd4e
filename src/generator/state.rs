//! Per-worker generation state: last observed second + sequence
//!
//! Pure state machine; the generator decides how to act on each transition

use crate::codec::MAX_SEQUENCE;

/// Combined state: absolute second of the last issued id and its sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct State {
    last_seen: Option<i64>,
    sequence: u16,
}

/// How a new clock reading relates to the stored state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// First call, or the clock moved forward: start over at sequence 0
    NewSecond,
    /// Same second as the last call, with this sequence still free
    SameSecond { sequence: u16 },
    /// Same second as the last call, every sequence already issued
    Exhausted,
    /// Clock reads earlier than the last call
    Behind { last: i64 },
}

impl State {
    /// Classify a clock reading without changing the state
    #[inline]
    pub fn transition(self, now: i64) -> Transition {
        let Some(last) = self.last_seen else {
            return Transition::NewSecond;
        };

        if now > last {
            Transition::NewSecond
        } else if now < last {
            Transition::Behind { last }
        } else if self.sequence < MAX_SEQUENCE {
            Transition::SameSecond {
                sequence: self.sequence + 1,
            }
        } else {
            Transition::Exhausted
        }
    }

    /// Record that `sequence` was issued at second `now`
    #[inline(always)]
    pub fn commit(&mut self, now: i64, sequence: u16) {
        self.last_seen = Some(now);
        self.sequence = sequence;
    }
}
