//! Gatewire: declarative wire data modeling for real-time chat API
//! payloads.
//!
//! ## Crate layout
//! - `core`: values, coercers, enum tables, model schemas, merge.
//! - `models`: the declarative model catalog for the API surface.
//! - `config`: YAML configuration with defaults merge and collected
//!   validation issues.

pub use gatewire_core as core;
pub use gatewire_models as models;

pub mod config;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// Domain vocabulary for payload-handling code.
///

pub mod prelude {
    pub use crate::config::{Config, ConfigError, ConfigIssue};
    pub use gatewire_core::{
        context::{Context, ContextHandle},
        error::ModelError,
        model::{Cardinality, FieldKind, FieldSpec, ModelInstance, ModelSchema, WireDefault},
        types::{EnumTable, EnumValue, Snowflake, Timestamp},
        value::Value,
    };
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    #[test]
    fn version_matches_the_workspace() {
        assert_eq!(crate::VERSION, env!("CARGO_PKG_VERSION"));
    }
}
