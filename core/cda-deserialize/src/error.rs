//! Error types for resource deserialization.

use crate::json::JsonShape;
use cda_model::ResourceKind;
use thiserror::Error;

/// Boxed error returned by custom entry factories and hooks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for deserialization operations.
pub type DeserializeResult<T> = Result<T, DeserializeError>;

/// Fatal conditions for a single deserialization call.
///
/// An envelope without `sys` is not an error; the dispatcher reports it as
/// "no resource" instead.
#[derive(Debug, Error)]
pub enum DeserializeError {
    #[error("unknown resource type: {0}")]
    UnknownResourceType(String),

    #[error("structural mismatch at '{path}': expected {expected}, found {found}")]
    StructuralMismatch {
        path: String,
        expected: JsonShape,
        found: JsonShape,
    },

    #[error("{kind} is missing required attribute '{path}'")]
    MissingAttribute { kind: ResourceKind, path: String },

    #[error("no active space in context: {0} fields need the space's default locale")]
    MissingActiveSpace(ResourceKind),

    #[error("failed to instantiate custom entry type for content type '{content_type_id}'")]
    CustomTypeInstantiation {
        content_type_id: String,
        #[source]
        source: BoxError,
    },

    #[error("custom entry type for content type '{content_type_id}' rejected its fields")]
    CustomTypeHydration {
        content_type_id: String,
        #[source]
        source: BoxError,
    },

    #[error("expected a {expected} resource, got {actual}")]
    UnexpectedKind {
        expected: ResourceKind,
        actual: ResourceKind,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DeserializeError {
    pub(crate) fn missing(kind: ResourceKind, path: impl Into<String>) -> Self {
        Self::MissingAttribute {
            kind,
            path: path.into(),
        }
    }

    pub(crate) fn mismatch(path: impl Into<String>, expected: JsonShape, found: JsonShape) -> Self {
        Self::StructuralMismatch {
            path: path.into(),
            expected,
            found,
        }
    }
}

/// Errors loading a [`DeserializerConfig`](crate::DeserializerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}
