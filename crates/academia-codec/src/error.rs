//! Error taxonomy for encoding and decoding.

use academia_core::ValidationError;

/// Error type for codec operations.
///
/// Every failure is terminal: no partially decoded value is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// A value object or entity invariant rejected the decoded data.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The encoder has no projection for the value.
    #[error("Unsupported value: {0}")]
    UnsupportedType(String),

    /// The discriminator names a type that is not registered.
    #[error("Unknown type '{0}'")]
    UnknownType(String),

    #[error("Invalid value '{value}' for enum {enum_name}")]
    InvalidEnumValue {
        enum_name: &'static str,
        value: String,
    },

    #[error("Malformed {expected} '{value}' in field '{field}'")]
    MalformedDate {
        field: String,
        expected: &'static str,
        value: String,
    },

    /// The decoded value is not of the type the caller required.
    #[error("Expected {expected}, found {found}")]
    UnexpectedType { expected: String, found: String },

    /// Traversal went deeper than the configured limit.
    #[error("Reference cycle suspected at depth {depth} (path: {path})")]
    CyclicReference { depth: usize, path: String },

    #[error("Missing field '{field}' for {type_name}")]
    MissingField {
        type_name: &'static str,
        field: &'static str,
    },

    #[error("Unknown field '{field}' for {type_name}")]
    UnknownField {
        type_name: &'static str,
        field: String,
    },

    /// A stored primitive has the wrong JSON type for its declared field.
    #[error("Field '{field}' expected {expected}, found {found}")]
    InvalidFieldType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;
