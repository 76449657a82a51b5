use crate::{
    context::ContextHandle,
    error::ModelError,
    model::{Cardinality, ModelSchema},
    value::Value,
};
use serde_json::{Map, Value as Json};
use std::fmt;

///
/// ModelInstance
///
/// A constructed aggregate: one coerced value per declared field, in
/// schema order, plus the optional context back-reference. Instances
/// are created per inbound payload; nothing here caches or
/// deduplicates them.
///

#[derive(Clone)]
pub struct ModelInstance {
    schema: &'static ModelSchema,
    slots: Vec<Value>,
    context: Option<ContextHandle>,
}

impl ModelInstance {
    pub(crate) const fn new(
        schema: &'static ModelSchema,
        slots: Vec<Value>,
        context: Option<ContextHandle>,
    ) -> Self {
        Self {
            schema,
            slots,
            context,
        }
    }

    #[must_use]
    pub const fn schema(&self) -> &'static ModelSchema {
        self.schema
    }

    #[must_use]
    pub fn context(&self) -> Option<&ContextHandle> {
        self.context.as_ref()
    }

    /// Read an attribute by declared field name. `None` means the
    /// schema does not declare the field; an unset optional attribute
    /// reads as `Value::Unset`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schema.field_index(name).map(|i| &self.slots[i])
    }

    /// Overwrite one attribute directly.
    ///
    /// The value must already be a coerced value of the field's
    /// declared kind; wire payloads go through `construct`/`merge`
    /// instead.
    pub fn set(&mut self, name: &str, value: Value) -> Result<(), ModelError> {
        let Some(index) = self.schema.field_index(name) else {
            return Err(ModelError::UnknownField {
                model: self.schema.name,
                field: name.to_string(),
            });
        };

        let spec = &self.schema.fields[index];
        let well_typed = match spec.cardinality {
            Cardinality::Many => match &value {
                Value::List(items) => items.iter().all(|item| spec.kind.admits(item)),
                _ => false,
            },
            Cardinality::One | Cardinality::Opt => spec.kind.admits(&value),
        };
        if !well_typed {
            return Err(ModelError::TypeMismatch {
                expected: spec.kind.name(),
                found: value.kind_name(),
                value: value.to_wire(),
            }
            .with_field(spec.name));
        }

        self.slots[index] = value;
        Ok(())
    }

    /// Merge a sparse partial payload into this instance.
    ///
    /// Only keys present in the partial mapping are re-coerced and
    /// overwritten; every other attribute is left untouched, and
    /// `required` is not enforced against absent keys. A present null
    /// clears an optional attribute back to its default/unset/empty
    /// state; clearing a required attribute is refused, since the
    /// instance must stay valid. The whole batch is staged first, so a
    /// failing key leaves the instance exactly as it was.
    pub fn merge(&mut self, partial: &Map<String, Json>) -> Result<(), ModelError> {
        tracing::debug!(
            model = self.schema.name,
            keys = partial.len(),
            "merging partial payload"
        );

        let mut staged = Vec::new();
        for (index, spec) in self.schema.fields.iter().enumerate() {
            let Some(raw) = partial.get(spec.name) else {
                continue;
            };

            let value = if raw.is_null() {
                spec.absent_value()?
            } else {
                spec.coerce_present(raw, self.context.as_ref())?
            };

            staged.push((index, value));
        }

        for (index, value) in staged {
            self.slots[index] = value;
        }

        Ok(())
    }

    /// Re-encode into a raw wire object. Unset attributes are omitted;
    /// every set attribute round-trips through its kind's wire form.
    #[must_use]
    pub fn to_wire(&self) -> Json {
        let mut object = Map::new();
        for (spec, slot) in self.schema.fields.iter().zip(&self.slots) {
            if slot.is_unset() {
                continue;
            }
            object.insert(spec.name.to_string(), slot.to_wire());
        }

        Json::Object(object)
    }
}

// Context handles are call-out plumbing, not wire data, so equality is
// schema identity plus attribute values only.
impl PartialEq for ModelInstance {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema, other.schema) && self.slots == other.slots
    }
}

// The reduced representation: only the schema's declared repr subset,
// keeping output bounded for deeply nested graphs.
impl fmt::Debug for ModelInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct(self.schema.name);
        for name in self.schema.repr_fields {
            if let Some(value) = self.get(name) {
                debug.field(name, value);
            }
        }
        debug.finish_non_exhaustive()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use crate::{
        context::{Context, ContextHandle},
        error::ModelError,
        model::{Cardinality, FieldKind, FieldSpec, ModelSchema, WireDefault},
        types::Snowflake,
        value::Value,
    };
    use serde_json::json;
    use std::sync::Arc;

    static MEMBER: ModelSchema = ModelSchema {
        path: "tests::Member",
        name: "member",
        fields: &[
            FieldSpec {
                name: "nick",
                kind: FieldKind::Text,
                cardinality: Cardinality::Opt,
                default: None,
            },
            FieldSpec {
                name: "deaf",
                kind: FieldKind::Bool,
                cardinality: Cardinality::Opt,
                default: Some(WireDefault::Bool(false)),
            },
            FieldSpec {
                name: "roles",
                kind: FieldKind::Snowflake,
                cardinality: Cardinality::Many,
                default: None,
            },
        ],
        repr_fields: &["nick"],
    };

    struct StubGateway;
    impl Context for StubGateway {}

    fn raw(json: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        json.as_object().cloned().unwrap()
    }

    #[test]
    fn merge_overwrites_only_present_keys() {
        let mut member = MEMBER
            .construct(&raw(json!({"nick": "A", "deaf": false})), None)
            .unwrap();

        member.merge(&raw(json!({"nick": "B"}))).unwrap();

        assert_eq!(member.get("nick").and_then(Value::as_text), Some("B"));
        assert_eq!(member.get("deaf"), Some(&Value::Bool(false)));
    }

    #[test]
    fn merge_does_not_enforce_required_fields() {
        static STRICT: ModelSchema = ModelSchema {
            path: "tests::Strict",
            name: "strict",
            fields: &[
                FieldSpec {
                    name: "id",
                    kind: FieldKind::Snowflake,
                    cardinality: Cardinality::One,
                    default: None,
                },
                FieldSpec {
                    name: "name",
                    kind: FieldKind::Text,
                    cardinality: Cardinality::Opt,
                    default: None,
                },
            ],
            repr_fields: &["id"],
        };

        let mut instance = STRICT
            .construct(&raw(json!({"id": "41771983423143937"})), None)
            .unwrap();

        // The partial carries no id; merge must not demand it.
        instance.merge(&raw(json!({"name": "after"}))).unwrap();

        assert_eq!(
            instance.get("id").and_then(Value::as_snowflake),
            Some(Snowflake::new(41_771_983_423_143_937))
        );
        assert_eq!(instance.get("name").and_then(Value::as_text), Some("after"));
    }

    #[test]
    fn merge_null_clears_back_to_default_or_unset() {
        let mut member = MEMBER
            .construct(&raw(json!({"nick": "A", "deaf": true})), None)
            .unwrap();

        member.merge(&raw(json!({"nick": null, "deaf": null}))).unwrap();

        assert!(member.get("nick").unwrap().is_unset());
        assert_eq!(member.get("deaf"), Some(&Value::Bool(false)));
    }

    #[test]
    fn failed_merge_leaves_the_instance_untouched() {
        let mut member = MEMBER
            .construct(&raw(json!({"nick": "A"})), None)
            .unwrap();

        let err = member
            .merge(&raw(json!({"nick": "B", "roles": ["1", 2.5]})))
            .unwrap_err();

        assert_eq!(err.path(), Some("roles[1]"));
        assert_eq!(member.get("nick").and_then(Value::as_text), Some("A"));
    }

    #[test]
    fn set_type_checks_against_the_declared_kind() {
        let mut member = MEMBER.construct(&raw(json!({})), None).unwrap();

        member.set("nick", Value::Text("direct".into())).unwrap();
        assert_eq!(member.get("nick").and_then(Value::as_text), Some("direct"));

        let err = member.set("nick", Value::Int(3)).unwrap_err();
        assert_eq!(err.path(), Some("nick"));

        let err = member.set("color", Value::Int(3)).unwrap_err();
        assert!(matches!(err, ModelError::UnknownField { .. }));
    }

    #[test]
    fn to_wire_omits_unset_and_round_trips_set_fields() {
        let payload = json!({"nick": "A", "roles": ["1", "2"]});
        let member = MEMBER.construct(&raw(payload), None).unwrap();

        assert_eq!(
            member.to_wire(),
            json!({"nick": "A", "deaf": false, "roles": ["1", "2"]})
        );
    }

    #[test]
    fn equality_ignores_the_context_handle() {
        let with_ctx: ContextHandle = Arc::new(StubGateway);

        let a = MEMBER.construct(&raw(json!({"nick": "A"})), None).unwrap();
        let b = MEMBER
            .construct(&raw(json!({"nick": "A"})), Some(with_ctx))
            .unwrap();

        assert_eq!(a, b);
        assert!(b.context().is_some());
    }

    #[test]
    fn debug_renders_only_the_repr_subset() {
        let member = MEMBER
            .construct(&raw(json!({"nick": "A", "deaf": true})), None)
            .unwrap();

        let rendered = format!("{member:?}");

        assert!(rendered.contains("nick"));
        assert!(!rendered.contains("deaf"));
    }
}
