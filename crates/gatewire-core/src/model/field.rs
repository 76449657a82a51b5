use crate::{
    coerce,
    context::ContextHandle,
    error::ModelError,
    model::ModelSchema,
    types::EnumTable,
    value::{Value, json_kind_name},
};
use serde_json::{Map, Value as Json};

///
/// FieldKind
///
/// Declared value kind of one model attribute. Scalars route to the
/// primitive coercers; enum and model kinds carry a reference to their
/// static table/schema.
///

#[derive(Clone, Copy, Debug)]
pub enum FieldKind {
    Bool,
    Int,
    Float,
    Text,
    Snowflake,
    Timestamp,
    Enum(&'static EnumTable),
    Model(&'static ModelSchema),
}

impl FieldKind {
    /// Stable kind name used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "text",
            Self::Snowflake => "snowflake",
            Self::Timestamp => "timestamp",
            Self::Enum(_) => "enum",
            Self::Model(_) => "model",
        }
    }

    /// Coerce one present, non-null raw value of this kind.
    pub(crate) fn coerce(
        &self,
        raw: &Json,
        context: Option<&ContextHandle>,
    ) -> Result<Value, ModelError> {
        match self {
            Self::Bool => coerce::bool_value(raw),
            Self::Int => coerce::int_value(raw),
            Self::Float => coerce::float_value(raw),
            Self::Text => coerce::text_value(raw),
            Self::Snowflake => coerce::snowflake_value(raw),
            Self::Timestamp => coerce::timestamp_value(raw),

            Self::Enum(table) => {
                let code = coerce::enum_code(raw)?;

                Ok(Value::Enum(table.from_wire(code)))
            }

            Self::Model(schema) => {
                let Some(nested) = raw.as_object() else {
                    return Err(ModelError::TypeMismatch {
                        expected: "model",
                        found: json_kind_name(raw),
                        value: raw.clone(),
                    });
                };

                schema.construct(nested, context.cloned()).map(Value::Model)
            }
        }
    }

    /// Returns true when `value` is a coerced value of this kind.
    /// `Unset` is accepted for every kind.
    #[must_use]
    pub fn admits(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Unset)
            | (Self::Bool, Value::Bool(_))
            | (Self::Int, Value::Int(_))
            | (Self::Float, Value::Float(_))
            | (Self::Text, Value::Text(_))
            | (Self::Snowflake, Value::Snowflake(_))
            | (Self::Timestamp, Value::Timestamp(_))
            | (Self::Enum(_), Value::Enum(_)) => true,
            (Self::Model(schema), Value::Model(instance)) => {
                std::ptr::eq(*schema, instance.schema())
            }
            _ => false,
        }
    }
}

///
/// Cardinality
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Cardinality {
    /// Required single value; construction fails when absent.
    #[default]
    One,
    /// Optional single value; absent resolves to the default, or unset.
    Opt,
    /// Ordered list of values; absent resolves to the empty list.
    Many,
}

///
/// WireDefault
///
/// Const-constructible default for an optional field. Only scalar
/// defaults exist; list and model fields have no declarable default.
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WireDefault {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(&'static str),
}

impl WireDefault {
    #[must_use]
    pub fn to_value(self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(b),
            Self::Int(i) => Value::Int(i),
            Self::Float(f) => Value::Float(f),
            Self::Text(s) => Value::Text(s.to_string()),
        }
    }
}

///
/// FieldSpec
///
/// One declared attribute of a model schema: wire key, value kind,
/// cardinality, and optional default.
///

#[derive(Debug)]
pub struct FieldSpec {
    /// Wire key and attribute name (snake_case).
    pub name: &'static str,
    pub kind: FieldKind,
    pub cardinality: Cardinality,
    pub default: Option<WireDefault>,
}

impl FieldSpec {
    #[must_use]
    pub const fn required(&self) -> bool {
        matches!(self.cardinality, Cardinality::One)
    }

    /// Coerce this field from a raw wire mapping.
    ///
    /// Absent and explicitly-null keys are treated alike: a required
    /// field fails, an optional one falls back to its default (or
    /// unset), a list to the empty list.
    pub(crate) fn coerce_from(
        &self,
        raw: &Map<String, Json>,
        context: Option<&ContextHandle>,
    ) -> Result<Value, ModelError> {
        let raw = raw.get(self.name).filter(|v| !v.is_null());

        match raw {
            Some(raw) => self.coerce_present(raw, context),
            None => self.absent_value(),
        }
    }

    /// Coerce a present, non-null raw value, annotating failures with
    /// this field's name.
    pub(crate) fn coerce_present(
        &self,
        raw: &Json,
        context: Option<&ContextHandle>,
    ) -> Result<Value, ModelError> {
        match self.cardinality {
            Cardinality::One | Cardinality::Opt => self
                .kind
                .coerce(raw, context)
                .map_err(|err| err.with_field(self.name)),

            Cardinality::Many => {
                let Some(items) = raw.as_array() else {
                    return Err(ModelError::TypeMismatch {
                        expected: "list",
                        found: json_kind_name(raw),
                        value: raw.clone(),
                    }
                    .with_field(self.name));
                };

                let mut coerced = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    let value = self
                        .kind
                        .coerce(item, context)
                        .map_err(|err| err.with_index(index).with_field(self.name))?;
                    coerced.push(value);
                }

                Ok(Value::List(coerced))
            }
        }
    }

    /// Value an absent (or null) wire key resolves to.
    pub(crate) fn absent_value(&self) -> Result<Value, ModelError> {
        match self.cardinality {
            Cardinality::One => Err(ModelError::MissingRequiredField { field: self.name }),
            Cardinality::Opt => Ok(self.default.map_or(Value::Unset, WireDefault::to_value)),
            Cardinality::Many => Ok(Value::List(Vec::new())),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NICK: FieldSpec = FieldSpec {
        name: "nick",
        kind: FieldKind::Text,
        cardinality: Cardinality::Opt,
        default: None,
    };

    const DEAF: FieldSpec = FieldSpec {
        name: "deaf",
        kind: FieldKind::Bool,
        cardinality: Cardinality::Opt,
        default: Some(WireDefault::Bool(false)),
    };

    const ID: FieldSpec = FieldSpec {
        name: "id",
        kind: FieldKind::Snowflake,
        cardinality: Cardinality::One,
        default: None,
    };

    const ROLES: FieldSpec = FieldSpec {
        name: "roles",
        kind: FieldKind::Int,
        cardinality: Cardinality::Many,
        default: None,
    };

    fn raw(json: Json) -> Map<String, Json> {
        json.as_object().cloned().unwrap()
    }

    #[test]
    fn required_field_fails_when_absent() {
        let err = ID.coerce_from(&raw(json!({})), None).unwrap_err();

        assert_eq!(err, ModelError::MissingRequiredField { field: "id" });
    }

    #[test]
    fn explicit_null_counts_as_absent() {
        let err = ID.coerce_from(&raw(json!({"id": null})), None).unwrap_err();

        assert_eq!(err, ModelError::MissingRequiredField { field: "id" });
    }

    #[test]
    fn optional_field_with_default_falls_back() {
        let value = DEAF.coerce_from(&raw(json!({})), None).unwrap();

        assert_eq!(value, Value::Bool(false));
    }

    #[test]
    fn optional_field_without_default_is_unset() {
        let value = NICK.coerce_from(&raw(json!({})), None).unwrap();

        assert!(value.is_unset());
    }

    #[test]
    fn list_field_preserves_wire_order() {
        let value = ROLES
            .coerce_from(&raw(json!({"roles": [3, 1, 2]})), None)
            .unwrap();

        assert_eq!(
            value,
            Value::List(vec![Value::Int(3), Value::Int(1), Value::Int(2)])
        );
    }

    #[test]
    fn absent_list_resolves_to_empty() {
        let value = ROLES.coerce_from(&raw(json!({})), None).unwrap();

        assert_eq!(value, Value::List(Vec::new()));
    }

    #[test]
    fn bad_list_element_fails_with_its_index() {
        let err = ROLES
            .coerce_from(&raw(json!({"roles": [1, "two", 3]})), None)
            .unwrap_err();

        assert_eq!(err.path(), Some("roles[1]"));
        assert!(matches!(err.leaf(), ModelError::TypeMismatch { .. }));
    }

    #[test]
    fn scalar_failure_names_the_field() {
        let err = NICK
            .coerce_from(&raw(json!({"nick": 42})), None)
            .unwrap_err();

        assert_eq!(err.path(), Some("nick"));
    }

    #[test]
    fn non_array_for_list_field_mismatches() {
        let err = ROLES
            .coerce_from(&raw(json!({"roles": "admin"})), None)
            .unwrap_err();

        assert_eq!(err.path(), Some("roles"));
        assert!(matches!(
            err.leaf(),
            ModelError::TypeMismatch { expected: "list", .. }
        ));
    }
}
