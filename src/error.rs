use thiserror::Error;

use crate::codec::Field;

/// Represents errors that can occur while packing or generating identifiers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeError {
    /// Error when worker ID exceeds the maximum allowed value
    #[error("Worker ID {worker_id} is invalid. Maximum allowed value is {max}")]
    InvalidWorkerId { worker_id: u16, max: u16 },
    /// Error when a field does not fit its bit width
    #[error("{field} value {value} does not fit. Allowed range is 0..={max}")]
    FieldOverflow { field: Field, value: i64, max: i64 },
    /// Error when every sequence number of the current second is used up
    #[error("Sequence exhausted for timestamp {timestamp}. Retry in the next second")]
    SequenceExhausted { timestamp: i64 },
    /// Error when clock moves backwards (system time issue)
    #[error(
        "Clock moved backwards from {last} to {now}. Refusing to generate id until it catches up"
    )]
    ClockMovedBackwards { last: i64, now: i64 },
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

/// Errors produced when parsing the `timestamp-worker-sequence` rendering
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSnowflakeError {
    #[error("expected 3 dash-separated fields, found {found}")]
    FieldCount { found: usize },
    #[error("{field} is not a decimal number: {input:?}")]
    InvalidNumber { field: Field, input: String },
    #[error(transparent)]
    Overflow(#[from] SnowflakeError),
}

/// Errors related to `GeneratorConfig` builder validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Epochs before the Unix epoch are not supported
    #[error("Epoch {epoch} is before the Unix epoch")]
    NegativeEpoch { epoch: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let invalid_worker = SnowflakeError::InvalidWorkerId {
            worker_id: 1024,
            max: 1023,
        };
        assert_eq!(
            invalid_worker.to_string(),
            "Worker ID 1024 is invalid. Maximum allowed value is 1023"
        );

        let clock_backwards = SnowflakeError::ClockMovedBackwards {
            last: 105,
            now: 100,
        };
        assert_eq!(
            clock_backwards.to_string(),
            "Clock moved backwards from 105 to 100. Refusing to generate id until it catches up"
        );

        let overflow = SnowflakeError::FieldOverflow {
            field: Field::Sequence,
            value: 4096,
            max: 4095,
        };
        assert_eq!(
            overflow.to_string(),
            "sequence value 4096 does not fit. Allowed range is 0..=4095"
        );

        let exhausted = SnowflakeError::SequenceExhausted { timestamp: 42 };
        assert_eq!(
            exhausted.to_string(),
            "Sequence exhausted for timestamp 42. Retry in the next second"
        );
    }

    #[test]
    fn test_parse_error_display() {
        assert_eq!(
            ParseSnowflakeError::FieldCount { found: 2 }.to_string(),
            "expected 3 dash-separated fields, found 2"
        );
        let err = ParseSnowflakeError::InvalidNumber {
            field: Field::Worker,
            input: "x1".to_string(),
        };
        assert_eq!(err.to_string(), "worker is not a decimal number: \"x1\"");
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::NegativeEpoch { epoch: -1 }.to_string(),
            "Epoch -1 is before the Unix epoch"
        );
    }

    #[test]
    fn test_error_clone() {
        let original = SnowflakeError::InvalidWorkerId {
            worker_id: 1024,
            max: 1023,
        };
        let cloned = original.clone();
        assert_eq!(original, cloned);
        assert!(format!("{:?}", original).contains("InvalidWorkerId"));
    }
}
