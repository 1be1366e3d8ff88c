//! Field-level translation errors for desired-state documents

use serde::Serialize;
use thiserror::Error;

/// A desired-state document field that could not be translated.
///
/// `field` is the attribute path as the host names it, e.g.
/// `custom_nameservers.soa_email`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldError {
    /// A required field is missing entirely.
    #[error("{field}: required field is missing")]
    Missing { field: String },

    /// A field is present but empty/whitespace-only.
    #[error("{field}: must not be empty")]
    Empty { field: String },

    /// A field is present but has the wrong type or shape.
    #[error("{field}: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A block was given more elements than it allows.
    #[error("{field}: at most {max} block(s) allowed, got {actual}")]
    TooManyItems {
        field: String,
        max: usize,
        actual: usize,
    },

    /// An enumerated field holds a value outside its table.
    #[error("{field}: unsupported value {value:?}, expected one of: {}", .valid.join(", "))]
    UnsupportedValue {
        field: String,
        value: String,
        valid: Vec<String>,
    },
}

impl FieldError {
    /// Attribute path the error refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field }
            | Self::Empty { field }
            | Self::InvalidFormat { field, .. }
            | Self::TooManyItems { field, .. }
            | Self::UnsupportedValue { field, .. } => field,
        }
    }
}
