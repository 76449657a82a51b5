use serde_json::Value as Json;
use thiserror::Error as ThisError;

///
/// ModelError
///
/// Structured failures for wire coercion and model construction.
/// All variants are local, recoverable failures; the calling layer
/// decides whether to drop the payload, log it, or retry the request.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum ModelError {
    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("expected {expected}, found {found}: {value}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
        value: Json,
    },

    #[error("value out of range for {expected}: {value}")]
    OutOfRange { expected: &'static str, value: Json },

    #[error("malformed timestamp: {value}")]
    MalformedTimestamp { value: String },

    #[error("unknown field on {model}: {field}")]
    UnknownField { model: &'static str, field: String },

    #[error("coercion failed at {path}: {source}")]
    Context {
        path: String,
        #[source]
        source: Box<Self>,
    },
}

impl ModelError {
    /// Prepend a field segment to the error path.
    #[must_use]
    pub fn with_field(self, field: impl AsRef<str>) -> Self {
        self.with_path_segment(field.as_ref())
    }

    /// Prepend an index segment to the error path.
    #[must_use]
    pub fn with_index(self, index: usize) -> Self {
        self.with_path_segment(format!("[{index}]"))
    }

    /// Return the full contextual path, if available.
    #[must_use]
    pub const fn path(&self) -> Option<&str> {
        match self {
            Self::Context { path, .. } => Some(path.as_str()),
            _ => None,
        }
    }

    /// Return the innermost, non-context error variant.
    #[must_use]
    pub fn leaf(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.leaf(),
            _ => self,
        }
    }

    #[must_use]
    fn with_path_segment(self, segment: impl Into<String>) -> Self {
        let segment = segment.into();
        match self {
            Self::Context { path, source } => Self::Context {
                path: Self::join_segments(segment.as_str(), path.as_str()),
                source,
            },
            source => Self::Context {
                path: segment,
                source: Box::new(source),
            },
        }
    }

    #[must_use]
    fn join_segments(prefix: &str, suffix: &str) -> String {
        if suffix.starts_with('[') {
            format!("{prefix}{suffix}")
        } else {
            format!("{prefix}.{suffix}")
        }
    }
}

///
/// TESTS
///
