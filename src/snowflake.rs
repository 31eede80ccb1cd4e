//! Identifier value types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::codec::{self, Field};
use crate::error::{ParseSnowflakeError, SnowflakeError};

/// A packed 64-bit identifier.
///
/// Ordering follows the raw integer, so ids from one worker sort by
/// timestamp first and sequence second.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(u64);

impl Snowflake {
    /// Build a snowflake from its fields, truncating values that do not fit
    #[inline]
    pub const fn new(timestamp: i64, worker: u16, sequence: u16) -> Self {
        Self(codec::pack(timestamp, worker, sequence))
    }

    /// Build a snowflake from its fields, rejecting values that do not fit
    pub fn try_new(timestamp: i64, worker: u16, sequence: u16) -> Result<Self, SnowflakeError> {
        codec::try_pack(timestamp, worker, sequence).map(Self)
    }

    #[inline(always)]
    pub const fn from_u64(raw: u64) -> Self {
        Self(raw)
    }

    #[inline(always)]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Seconds since the generator's epoch
    #[inline(always)]
    pub const fn timestamp(self) -> i64 {
        codec::timestamp(self.0)
    }

    #[inline(always)]
    pub const fn worker(self) -> u16 {
        codec::worker(self.0)
    }

    #[inline(always)]
    pub const fn sequence(self) -> u16 {
        codec::sequence(self.0)
    }

    #[inline]
    pub const fn parts(self) -> SnowflakeParts {
        codec::unpack(self.0)
    }

    /// Absolute Unix seconds, given the epoch the id was generated against
    #[inline]
    pub const fn unix_seconds(self, epoch: i64) -> i64 {
        self.timestamp() + epoch
    }

    /// Wall-clock time the id was generated at, or `None` if out of range
    pub fn datetime(self, epoch: i64) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.unix_seconds(epoch), 0)
    }

    /// Big-endian bytes; byte-wise order matches integer order
    #[inline]
    pub const fn to_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(u64::from_be_bytes(bytes))
    }
}

impl From<u64> for Snowflake {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<Snowflake> for u64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl From<SnowflakeParts> for Snowflake {
    fn from(parts: SnowflakeParts) -> Self {
        parts.snowflake()
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.parts(), f)
    }
}

impl FromStr for Snowflake {
    type Err = ParseSnowflakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<SnowflakeParts>().map(SnowflakeParts::snowflake)
    }
}

/// The three fields of a [`Snowflake`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SnowflakeParts {
    pub timestamp: i64,
    pub worker: u16,
    pub sequence: u16,
}

impl SnowflakeParts {
    #[inline]
    pub const fn pack(self) -> u64 {
        codec::pack(self.timestamp, self.worker, self.sequence)
    }

    #[inline]
    pub const fn snowflake(self) -> Snowflake {
        Snowflake(self.pack())
    }
}

impl fmt::Display for SnowflakeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.timestamp, self.worker, self.sequence)
    }
}

impl FromStr for SnowflakeParts {
    type Err = ParseSnowflakeError;

    /// Parse `timestamp-worker-sequence`, rejecting fields wider than the layout
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split('-').collect();
        let [timestamp, worker, sequence] = fields.as_slice() else {
            return Err(ParseSnowflakeError::FieldCount {
                found: fields.len(),
            });
        };

        let timestamp = parse_field(Field::Timestamp, timestamp)?;
        let worker = parse_field(Field::Worker, worker)?;
        let sequence = parse_field(Field::Sequence, sequence)?;

        Ok(Self {
            timestamp,
            worker: worker as u16,
            sequence: sequence as u16,
        })
    }
}

fn parse_field(field: Field, input: &str) -> Result<i64, ParseSnowflakeError> {
    let invalid = || ParseSnowflakeError::InvalidNumber {
        field,
        input: input.to_string(),
    };
    // `i64::from_str` accepts a leading '+'; the rendering never emits one
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let value = input.parse::<i64>().map_err(|_| invalid())?;
    field.check(value)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPOCH_2020: i64 = 1_577_836_800;
    const ELAPSED_TO_2022: i64 = 1_640_995_200 - EPOCH_2020;

    #[test]
    fn test_snowflake_fields() {
        let s = Snowflake::new(ELAPSED_TO_2022, 0, 0);
        assert_eq!(s.timestamp(), ELAPSED_TO_2022);
        assert_eq!(Snowflake::new(0, 1001, 0).worker(), 1001);
        assert_eq!(Snowflake::new(0, 0, 17).sequence(), 17);
    }

    #[test]
    fn test_conversion_to_parts() {
        let s = Snowflake::new(ELAPSED_TO_2022, 1001, 17);
        let parts = s.parts();
        assert_eq!(
            parts,
            SnowflakeParts {
                timestamp: 63_158_400,
                worker: 1001,
                sequence: 17
            }
        );
        assert_eq!(parts.snowflake(), s);
        assert_eq!(Snowflake::from(parts), s);
    }

    #[test]
    fn test_try_new() {
        assert!(Snowflake::try_new(0, 1023, 4095).is_ok());
        assert!(matches!(
            Snowflake::try_new(0, 1024, 0),
            Err(SnowflakeError::FieldOverflow {
                field: Field::Worker,
                ..
            })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Snowflake::new(63_115_200, 1001, 4).to_string(),
            "63115200-1001-4"
        );
    }

    #[test]
    fn test_parse() {
        let s: Snowflake = "63115200-1001-4".parse().unwrap();
        assert_eq!(s, Snowflake::new(63_115_200, 1001, 4));

        assert_eq!(
            "1-2".parse::<Snowflake>(),
            Err(ParseSnowflakeError::FieldCount { found: 2 })
        );
        // A negative timestamp shows up as an extra empty field
        assert_eq!(
            "-1-2-3".parse::<Snowflake>(),
            Err(ParseSnowflakeError::FieldCount { found: 4 })
        );
        assert_eq!(
            "1-+2-3".parse::<Snowflake>(),
            Err(ParseSnowflakeError::InvalidNumber {
                field: Field::Worker,
                input: "+2".to_string()
            })
        );
        assert_eq!(
            "1-2-".parse::<Snowflake>(),
            Err(ParseSnowflakeError::InvalidNumber {
                field: Field::Sequence,
                input: String::new()
            })
        );
        assert_eq!(
            "1-1024-0".parse::<Snowflake>(),
            Err(ParseSnowflakeError::Overflow(SnowflakeError::FieldOverflow {
                field: Field::Worker,
                value: 1024,
                max: 1023
            }))
        );
    }

    #[test]
    fn test_bytes_are_big_endian() {
        let s = Snowflake::new(1, 0, 0);
        assert_eq!(s.to_bytes(), [0, 0, 0, 0, 0, 0x40, 0, 0]);
        assert_eq!(Snowflake::from_bytes(s.to_bytes()), s);

        let earlier = Snowflake::new(10, 1023, 4095);
        let later = Snowflake::new(11, 0, 0);
        assert!(earlier < later);
        assert!(earlier.to_bytes() < later.to_bytes());
    }

    #[test]
    fn test_datetime() {
        let s = Snowflake::new(ELAPSED_TO_2022, 1, 0);
        assert_eq!(s.unix_seconds(EPOCH_2020), 1_640_995_200);
        let dt = s.datetime(EPOCH_2020).unwrap();
        assert_eq!(dt.to_rfc3339(), "2022-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_u64_conversions() {
        let s = Snowflake::from(42u64);
        assert_eq!(u64::from(s), 42);
        assert_eq!(Snowflake::from_u64(42), s);
        assert_eq!(s.as_u64(), 42);
    }
}
