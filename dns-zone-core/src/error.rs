//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::FieldError;

// Re-export library error type
pub use dns_zone_provider::{ConfigValidationError, ProviderError};

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The desired-state document could not be translated (structured, field level)
    #[error("Invalid configuration: {0}")]
    Validation(FieldError),

    /// Provider configuration is incomplete or malformed
    #[error("{0}")]
    Config(ConfigValidationError),

    /// A remote call failed; `operation` says which step of the lifecycle it was
    #[error("{operation}: {source}")]
    Remote {
        operation: String,
        #[source]
        source: ProviderError,
    },

    /// The resource identifier is not the decimal encoding of an i64
    #[error("Invalid zone id: {0:?}")]
    InvalidId(String),

    /// The resource record carries no identifier yet
    #[error("Resource has no zone id")]
    MissingId,

    /// A remote entity could not be turned into cached state
    #[error("Converting API zone to resource state failed: {0}")]
    StateConversion(String),

    /// The caller cancelled the operation
    #[error("Operation cancelled")]
    Cancelled,

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Wrap a provider error with the lifecycle step that produced it.
    pub fn remote(operation: impl Into<String>, source: ProviderError) -> Self {
        Self::Remote {
            operation: operation.into(),
            source,
        }
    }

    /// Whether it is expected behavior (user input, resource does not exist, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_)
            | Self::Config(_)
            | Self::InvalidId(_)
            | Self::MissingId
            | Self::Cancelled => true,
            Self::Remote { source, .. } | Self::Provider(source) => source.is_expected(),
            Self::StateConversion(_) => false,
        }
    }

    /// Whether the underlying remote error reports a missing zone.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Remote { source, .. } | Self::Provider(source) => source.is_not_found(),
            _ => false,
        }
    }
}

impl From<FieldError> for CoreError {
    fn from(err: FieldError) -> Self {
        Self::Validation(err)
    }
}

impl From<ConfigValidationError> for CoreError {
    fn from(err: ConfigValidationError) -> Self {
        Self::Config(err)
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
