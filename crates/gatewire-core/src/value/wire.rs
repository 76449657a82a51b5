use crate::value::Value;
use serde_json::Value as Json;

/// Stable name for a raw JSON value's kind, used in diagnostics.
#[must_use]
pub const fn json_kind_name(raw: &Json) -> &'static str {
    match raw {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

impl Value {
    /// Re-encode into the raw wire form.
    ///
    /// Snowflakes become decimal strings, timestamps their canonical
    /// ISO-8601 form, enums their raw code (unrecognized codes pass
    /// through unchanged). `Unset` encodes as null when forced to stand
    /// alone; model serialization omits unset attributes instead.
    #[must_use]
    pub fn to_wire(&self) -> Json {
        match self {
            Self::Bool(b) => Json::Bool(*b),
            Self::Int(i) => Json::from(*i),
            Self::Float(f) => serde_json::Number::from_f64(*f).map_or(Json::Null, Json::Number),
            Self::Text(s) => Json::String(s.clone()),
            Self::Snowflake(id) => Json::String(id.to_string()),
            Self::Timestamp(ts) => Json::String(ts.to_wire()),
            Self::Enum(e) => Json::from(e.to_wire()),
            Self::List(items) => Json::Array(items.iter().map(Self::to_wire).collect()),
            Self::Model(instance) => instance.to_wire(),
            Self::Unset => Json::Null,
        }
    }
}

///
/// TESTS
///
