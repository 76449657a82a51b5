use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer, de::Deserializer};
use std::fmt;
use thiserror::Error as ThisError;

///
/// TimestampError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TimestampError {
    #[error("not an ISO-8601 timestamp: {0}")]
    Unparseable(String),

    #[error("instant not representable: {0}")]
    OutOfRange(i64),
}

///
/// Timestamp
///
/// Calendar instant carried on the wire as an ISO-8601 string with an
/// explicit UTC offset and optional fractional seconds. Stored at
/// microsecond precision, which covers the wire format's six fraction
/// digits, so parse/serialize round-trips are lossless.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Parse the wire string form. Any explicit offset is accepted and
    /// normalized to UTC; sub-microsecond digits are truncated.
    pub fn parse(s: &str) -> Result<Self, TimestampError> {
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|_| TimestampError::Unparseable(s.to_string()))?;

        Self::from_unix_micros(dt.with_timezone(&Utc).timestamp_micros())
    }

    /// Construct from milliseconds since the Unix epoch.
    pub fn from_unix_ms(ms: i64) -> Result<Self, TimestampError> {
        DateTime::from_timestamp_millis(ms)
            .map(Self)
            .ok_or(TimestampError::OutOfRange(ms))
    }

    /// Construct from microseconds since the Unix epoch.
    pub fn from_unix_micros(us: i64) -> Result<Self, TimestampError> {
        DateTime::from_timestamp_micros(us)
            .map(Self)
            .ok_or(TimestampError::OutOfRange(us))
    }

    #[must_use]
    pub fn unix_ms(self) -> i64 {
        self.0.timestamp_millis()
    }

    #[must_use]
    pub fn unix_micros(self) -> i64 {
        self.0.timestamp_micros()
    }

    /// Current wall-clock instant, truncated to microseconds.
    #[must_use]
    pub fn now() -> Self {
        Self::from_unix_micros(Utc::now().timestamp_micros()).unwrap_or_default()
    }

    /// Canonical wire string: UTC, six fraction digits, `+00:00` offset.
    #[must_use]
    pub fn to_wire(self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Micros, false)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self(DateTime::UNIX_EPOCH)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

///
/// TESTS
///
