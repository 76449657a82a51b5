mod enumeration;
mod snowflake;
mod timestamp;

pub use enumeration::{EnumMember, EnumTable, EnumValue};
pub use snowflake::{Snowflake, SnowflakeError};
pub use timestamp::{Timestamp, TimestampError};
