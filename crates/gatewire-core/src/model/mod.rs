mod field;
mod instance;
mod schema;

pub use field::{Cardinality, FieldKind, FieldSpec, WireDefault};
pub use instance::ModelInstance;
pub use schema::ModelSchema;

///
/// model_schema
///
/// Declare a static model schema table. Fields are
/// `(name, kind, cardinality)` tuples with an optional trailing
/// `default = ...`; declaration order is the schema order.
///
#[macro_export]
macro_rules! model_schema {
    (
        $(#[$meta:meta])*
        $vis:vis static $ident:ident {
            path: $path:expr,
            name: $name:expr,
            repr: [ $( $repr:expr ),* $(,)? ],
            fields: [
                $( ( $fname:expr, $kind:expr, $card:ident $(, default = $default:expr )? ) ),+ $(,)?
            ] $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis static $ident: $crate::model::ModelSchema = $crate::model::ModelSchema {
            path: $path,
            name: $name,
            fields: &[
                $(
                    $crate::model::FieldSpec {
                        name: $fname,
                        kind: $kind,
                        cardinality: $crate::model::Cardinality::$card,
                        default: $crate::model_schema!(@default $( $default )?),
                    }
                ),+
            ],
            repr_fields: &[ $( $repr ),* ],
        };
    };

    (@default) => { ::core::option::Option::None };
    (@default $default:expr) => { ::core::option::Option::Some($default) };
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use crate::{
        model::{FieldKind, WireDefault},
        value::Value,
    };
    use serde_json::json;

    crate::model_schema! {
        static ROLE {
            path: "tests::Role",
            name: "role",
            repr: ["id", "name"],
            fields: [
                ("id", FieldKind::Snowflake, One),
                ("name", FieldKind::Text, One),
                ("hoist", FieldKind::Bool, Opt, default = WireDefault::Bool(false)),
            ],
        }
    }

    #[test]
    fn macro_declares_fields_in_order() {
        let names: Vec<_> = ROLE.fields.iter().map(|f| f.name).collect();

        assert_eq!(names, ["id", "name", "hoist"]);
        assert!(ROLE.fields[0].required());
        assert!(!ROLE.fields[2].required());
    }

    #[test]
    fn macro_defaults_apply_on_construction() {
        let raw = json!({"id": "1", "name": "admin"});
        let role = ROLE.construct(raw.as_object().unwrap(), None).unwrap();

        assert_eq!(role.get("hoist"), Some(&Value::Bool(false)));
    }
}
