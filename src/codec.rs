//! Bit layout of a snowflake and the pure functions packing into it
//!
//! ```text
//!  63 | 62 ........ 22 | 21 ..... 12 | 11 ...... 0
//!   0 |  timestamp (41) | worker (10) | sequence (12)
//! ```

use std::fmt;

use crate::error::SnowflakeError;
use crate::snowflake::SnowflakeParts;

pub const TIMESTAMP_BITS: u32 = 41;
pub const WORKER_BITS: u32 = 10;
pub const SEQUENCE_BITS: u32 = 12;

pub const WORKER_SHIFT: u32 = SEQUENCE_BITS;
pub const TIMESTAMP_SHIFT: u32 = SEQUENCE_BITS + WORKER_BITS;

pub const TIMESTAMP_MASK: u64 = (1 << TIMESTAMP_BITS) - 1;
pub const WORKER_MASK: u64 = (1 << WORKER_BITS) - 1;
pub const SEQUENCE_MASK: u64 = (1 << SEQUENCE_BITS) - 1;

/// Largest timestamp (seconds since the epoch) the layout can hold
pub const MAX_TIMESTAMP: i64 = TIMESTAMP_MASK as i64;
pub const MAX_WORKER_ID: u16 = WORKER_MASK as u16;
pub const MAX_SEQUENCE: u16 = SEQUENCE_MASK as u16;

/// Names one of the three fields of a snowflake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Timestamp,
    Worker,
    Sequence,
}

impl Field {
    /// Largest value the field can hold
    pub const fn max(self) -> i64 {
        match self {
            Field::Timestamp => MAX_TIMESTAMP,
            Field::Worker => MAX_WORKER_ID as i64,
            Field::Sequence => MAX_SEQUENCE as i64,
        }
    }

    /// Fail unless `value` fits the field's bit width
    pub(crate) fn check(self, value: i64) -> Result<(), SnowflakeError> {
        let max = self.max();
        if !(0..=max).contains(&value) {
            return Err(SnowflakeError::FieldOverflow {
                field: self,
                value,
                max,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Timestamp => "timestamp",
            Field::Worker => "worker",
            Field::Sequence => "sequence",
        })
    }
}

/// Pack three fields into one identifier.
///
/// Values wider than their field are masked, so out-of-range input is
/// truncated rather than rejected. Use [`try_pack`] to reject it.
#[inline(always)]
pub const fn pack(timestamp: i64, worker: u16, sequence: u16) -> u64 {
    ((timestamp as u64 & TIMESTAMP_MASK) << TIMESTAMP_SHIFT)
        | ((worker as u64 & WORKER_MASK) << WORKER_SHIFT)
        | (sequence as u64 & SEQUENCE_MASK)
}

/// Pack three fields, failing with [`SnowflakeError::FieldOverflow`] for the
/// first field that does not fit
#[inline]
pub fn try_pack(timestamp: i64, worker: u16, sequence: u16) -> Result<u64, SnowflakeError> {
    Field::Timestamp.check(timestamp)?;
    Field::Worker.check(worker as i64)?;
    Field::Sequence.check(sequence as i64)?;
    Ok(pack(timestamp, worker, sequence))
}

/// Extract timestamp component from a snowflake
#[inline(always)]
pub const fn timestamp(id: u64) -> i64 {
    ((id >> TIMESTAMP_SHIFT) & TIMESTAMP_MASK) as i64
}

/// Extract worker component from a snowflake
#[inline(always)]
pub const fn worker(id: u64) -> u16 {
    ((id >> WORKER_SHIFT) & WORKER_MASK) as u16
}

/// Extract sequence component from a snowflake
#[inline(always)]
pub const fn sequence(id: u64) -> u16 {
    (id & SEQUENCE_MASK) as u16
}

/// Decompose a snowflake into its components: timestamp, worker and sequence
#[inline]
pub const fn unpack(id: u64) -> SnowflakeParts {
    SnowflakeParts {
        timestamp: timestamp(id),
        worker: worker(id),
        sequence: sequence(id),
    }
}

/// Render a snowflake as `timestamp-worker-sequence`
pub fn render(id: u64) -> String {
    unpack(id).to_string()
}
