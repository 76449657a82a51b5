use crate::{
    context::ContextHandle,
    error::ModelError,
    model::{FieldSpec, ModelInstance},
};
use serde_json::{Map, Value as Json};

///
/// ModelSchema
///
/// Explicit, inspectable schema table for one model type: an ordered
/// set of declared fields plus the reduced-representation subset.
/// Declared once as a static (see `model_schema!`); construction is a
/// pure function over this table and a raw wire mapping.
///

#[derive(Debug)]
pub struct ModelSchema {
    /// Fully-qualified Rust type path (for diagnostics).
    pub path: &'static str,
    /// Stable model name used in logs and errors.
    pub name: &'static str,
    /// Ordered field list; declaration order fixes failure-reporting
    /// order.
    pub fields: &'static [FieldSpec],
    /// Attribute subset rendered by the reduced debug representation.
    pub repr_fields: &'static [&'static str],
}

impl ModelSchema {
    /// Look up a declared field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.field_index(name).map(|i| &self.fields[i])
    }

    #[must_use]
    pub(crate) fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|spec| spec.name == name)
    }

    /// Build an instance from a raw wire mapping.
    ///
    /// Fields coerce in declaration order and the first failure, in
    /// that order, is the reported error, keeping diagnostics
    /// deterministic for a given malformed payload. Unknown wire keys
    /// are ignored: the protocol grows keys ahead of client releases.
    /// Yields a fully valid instance or an error, never anything
    /// partial.
    pub fn construct(
        &'static self,
        raw: &Map<String, Json>,
        context: Option<ContextHandle>,
    ) -> Result<ModelInstance, ModelError> {
        tracing::trace!(model = self.name, keys = raw.len(), "constructing instance");

        let mut slots = Vec::with_capacity(self.fields.len());
        for spec in self.fields {
            slots.push(spec.coerce_from(raw, context.as_ref())?);
        }

        Ok(ModelInstance::new(self, slots, context))
    }
}

///
/// TESTS
///
