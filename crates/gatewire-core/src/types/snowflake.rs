use crate::types::Timestamp;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize, Serializer, de::Deserializer};
use std::str::FromStr;
use thiserror::Error as ThisError;

///
/// SnowflakeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SnowflakeError {
    #[error("snowflake is not a decimal string")]
    NotDecimal,

    #[error("snowflake exceeds 64 bits")]
    Overflow,
}

///
/// Snowflake
///
/// Opaque 64-bit object id with an embedded creation time.
/// Ordering and equality are by raw integer value, which also orders
/// ids by creation time. The wire form is always the decimal string,
/// because not every JSON consumer can represent 64-bit integers
/// precisely.
///

#[derive(
    Clone, Copy, Debug, Default, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd,
)]
#[repr(transparent)]
pub struct Snowflake(u64);

impl Snowflake {
    /// Epoch offset of the embedded timestamp, in milliseconds since
    /// the Unix epoch (2015-01-01T00:00:00Z).
    pub const EPOCH_MS: u64 = 1_420_070_400_000;

    pub const MIN: Self = Self(u64::MIN);
    pub const MAX: Self = Self(u64::MAX);

    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Milliseconds since the Unix epoch at which this id was minted.
    #[must_use]
    pub const fn timestamp_ms(self) -> u64 {
        (self.0 >> 22) + Self::EPOCH_MS
    }

    /// Creation instant decoded from the embedded timestamp.
    #[must_use]
    pub fn created_at(self) -> Timestamp {
        // timestamp_ms is bounded by (u64::MAX >> 22) + EPOCH_MS, well
        // inside chrono's representable range, so the fallback is moot.
        Timestamp::from_unix_ms(self.timestamp_ms() as i64).unwrap_or_default()
    }

    /// Internal worker id (bits 21..17).
    #[must_use]
    pub const fn worker_id(self) -> u8 {
        ((self.0 & 0x3E_0000) >> 17) as u8
    }

    /// Internal process id (bits 16..12).
    #[must_use]
    pub const fn process_id(self) -> u8 {
        ((self.0 & 0x1_F000) >> 12) as u8
    }

    /// Per-process rollover counter (bits 11..0).
    #[must_use]
    pub const fn increment(self) -> u16 {
        (self.0 & 0xFFF) as u16
    }
}

impl FromStr for Snowflake {
    type Err = SnowflakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SnowflakeError::NotDecimal);
        }

        s.parse::<u64>()
            .map(Self)
            .map_err(|_| SnowflakeError::Overflow)
    }
}

// The wire form is the decimal string, so serde goes through strings
// rather than the serde_json u64 fast path.
impl Serialize for Snowflake {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

///
/// TESTS
///
