//! Primitive coercers: raw wire scalar → typed [`Value`].
//!
//! Every coercer either produces a value of its kind or fails with a
//! structured error naming the expected kind and the offending raw
//! value. No implicit lossy narrowing: integers accept only integral
//! JSON numbers in i64 range, and nothing silently wraps.

use crate::{
    error::ModelError,
    types::{Snowflake, SnowflakeError, Timestamp},
    value::{Value, json_kind_name},
};
use serde_json::Value as Json;
use std::str::FromStr;

pub fn bool_value(raw: &Json) -> Result<Value, ModelError> {
    raw.as_bool().map(Value::Bool).ok_or_else(|| mismatch("bool", raw))
}

pub fn int_value(raw: &Json) -> Result<Value, ModelError> {
    if let Some(i) = raw.as_i64() {
        return Ok(Value::Int(i));
    }

    // u64-only and float numbers are numbers, but not i64 values.
    if raw.is_u64() {
        return Err(ModelError::OutOfRange {
            expected: "int",
            value: raw.clone(),
        });
    }

    Err(mismatch("int", raw))
}

pub fn float_value(raw: &Json) -> Result<Value, ModelError> {
    raw.as_f64().map(Value::Float).ok_or_else(|| mismatch("float", raw))
}

pub fn text_value(raw: &Json) -> Result<Value, ModelError> {
    raw.as_str()
        .map(|s| Value::Text(s.to_string()))
        .ok_or_else(|| mismatch("text", raw))
}

pub fn snowflake_value(raw: &Json) -> Result<Value, ModelError> {
    // Canonical wire form is the decimal string; unsigned integers are
    // tolerated for payloads that never left a 64-bit-clean producer.
    if let Some(s) = raw.as_str() {
        return match Snowflake::from_str(s) {
            Ok(id) => Ok(Value::Snowflake(id)),
            Err(SnowflakeError::Overflow) => Err(ModelError::OutOfRange {
                expected: "snowflake",
                value: raw.clone(),
            }),
            Err(SnowflakeError::NotDecimal) => Err(mismatch("snowflake", raw)),
        };
    }

    if let Some(u) = raw.as_u64() {
        return Ok(Value::Snowflake(Snowflake::new(u)));
    }

    // Remaining numbers are negative integers (below the id space) or
    // floats (not an id representation at all).
    if raw.is_i64() {
        return Err(ModelError::OutOfRange {
            expected: "snowflake",
            value: raw.clone(),
        });
    }

    Err(mismatch("snowflake", raw))
}

pub fn enum_code(raw: &Json) -> Result<i64, ModelError> {
    if let Some(code) = raw.as_i64() {
        return Ok(code);
    }

    if raw.is_u64() {
        return Err(ModelError::OutOfRange {
            expected: "enum",
            value: raw.clone(),
        });
    }

    Err(mismatch("enum", raw))
}

pub fn timestamp_value(raw: &Json) -> Result<Value, ModelError> {
    let Some(s) = raw.as_str() else {
        return Err(mismatch("timestamp", raw));
    };

    Timestamp::parse(s)
        .map(Value::Timestamp)
        .map_err(|_| ModelError::MalformedTimestamp {
            value: s.to_string(),
        })
}

fn mismatch(expected: &'static str, raw: &Json) -> ModelError {
    ModelError::TypeMismatch {
        expected,
        found: json_kind_name(raw),
        value: raw.clone(),
    }
}

///
/// TESTS
///
