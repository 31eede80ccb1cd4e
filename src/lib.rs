//! # snowflake
//!
//! Compact, sortable 64-bit identifiers for distributed systems.
//!
//! Each id packs, most significant first:
//! - 41 bits of seconds since a caller-chosen epoch
//! - 10 bits of worker id
//! - 12 bits of per-second sequence
//!
//! Ids from one worker sort in generation order as long as the clock does not
//! go backwards and no more than 4096 ids are requested in one second. Both
//! conditions are reported as errors by default instead of silently breaking
//! the ordering; see [`SequencePolicy`] and [`ClockPolicy`].
//!
//! ```
//! use snowflake::Generator;
//!
//! let mut generator = Generator::new(1_577_836_800, 1001).unwrap();
//! let id = generator.next().unwrap();
//! assert_eq!(id.worker(), 1001);
//! println!("{id}"); // timestamp-worker-sequence
//! ```

#![forbid(unsafe_code)]

pub mod codec;
mod config;
mod error;
mod generator;
mod snowflake;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use codec::{Field, MAX_SEQUENCE, MAX_TIMESTAMP, MAX_WORKER_ID};
pub use config::{
    ClockPolicy, GeneratorConfig, GeneratorConfigBuilder, SequencePolicy, DEFAULT_EPOCH,
};
pub use error::{ConfigError, ParseSnowflakeError, SnowflakeError};
pub use generator::{Clock, Generator, SharedGenerator, SystemClock};
pub use snowflake::{Snowflake, SnowflakeParts};
