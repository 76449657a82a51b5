mod wire;

pub use wire::json_kind_name;

use crate::{
    model::ModelInstance,
    types::{EnumValue, Snowflake, Timestamp},
};

///
/// Value
///
/// A coerced, typed attribute value.
///
/// `Unset` marks an optional attribute with no declared default that
/// was absent (or null) on the wire. It is distinguishable from every
/// real value, including `Bool(false)`, `Int(0)`, and empty text, so
/// calling code can tell "never set" from "set to falsy".
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Snowflake(Snowflake),
    Timestamp(Timestamp),
    Enum(EnumValue),
    /// Ordered list of values; wire order is preserved.
    List(Vec<Self>),
    /// Nested model instance, owned by the parent.
    Model(ModelInstance),
    Unset,
}

impl Value {
    /// Stable kind name used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Snowflake(_) => "snowflake",
            Self::Timestamp(_) => "timestamp",
            Self::Enum(_) => "enum",
            Self::List(_) => "list",
            Self::Model(_) => "model",
            Self::Unset => "unset",
        }
    }

    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    ///
    /// CONVERSION
    ///

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(b) = self { Some(*b) } else { None }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        if let Self::Int(i) = self { Some(*i) } else { None }
    }

    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        if let Self::Float(f) = self { Some(*f) } else { None }
    }

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_snowflake(&self) -> Option<Snowflake> {
        if let Self::Snowflake(id) = self {
            Some(*id)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_timestamp(&self) -> Option<Timestamp> {
        if let Self::Timestamp(ts) = self {
            Some(*ts)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_enum(&self) -> Option<EnumValue> {
        if let Self::Enum(e) = self { Some(*e) } else { None }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&[Self]> {
        if let Self::List(xs) = self {
            Some(xs.as_slice())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_model(&self) -> Option<&ModelInstance> {
        if let Self::Model(m) = self { Some(m) } else { None }
    }

    ///
    /// QUERY
    ///

    /// Find the first list element whose named attribute equals
    /// `needle`, in wire order. Returns `None` when this value is not a
    /// list, no element matches, or no element carries the attribute —
    /// an explicit absent-result, never a falsy sentinel. Ties resolve
    /// to the earliest index, since wire order is the only meaningful
    /// order available.
    #[must_use]
    pub fn find(&self, attribute: &str, needle: &Self) -> Option<&Self> {
        let items = self.as_list()?;

        items.iter().find(|item| {
            item.as_model()
                .and_then(|m| m.get(attribute))
                .is_some_and(|v| v == needle)
        })
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Snowflake> for Value {
    fn from(v: Snowflake) -> Self {
        Self::Snowflake(v)
    }
}

impl From<Timestamp> for Value {
    fn from(v: Timestamp) -> Self {
        Self::Timestamp(v)
    }
}

impl From<EnumValue> for Value {
    fn from(v: EnumValue) -> Self {
        Self::Enum(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(vec: Vec<Self>) -> Self {
        Self::List(vec)
    }
}

///
/// TESTS
///
