use serde::{Deserialize, Serialize};

/// Unified error type for all DNS zone API operations.
///
/// Each variant includes a `provider` field identifying which backend produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Transient Errors
///
/// [`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout) and
/// [`RateLimited`](Self::RateLimited) describe transient failures. The client never
/// retries them itself; retrying is left to the host runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The configured API key is invalid or expired.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The specified DNS zone does not exist.
    ///
    /// Callers distinguish this from other failures: a read turns it into a
    /// "resource gone" outcome, a delete treats it as success.
    ZoneNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Identifier of the zone that was not found.
        zone_id: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A request parameter was rejected (e.g., malformed domain, bad SOA email).
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    RateLimited {
        /// Provider that produced the error.
        provider: String,
        /// Suggested wait time in seconds before retrying, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API key lacks permission for the requested operation.
    PermissionDenied {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// An unrecognized error from the provider API.
    ///
    /// This is a catch-all for status codes not yet mapped to a specific variant.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// Whether this is expected behavior (bad input, missing resource, ...), used to pick
    /// the log level.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    /// **Keep this in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::ZoneNotFound { .. }
                | Self::InvalidParameter { .. }
                | Self::PermissionDenied { .. }
        )
    }

    /// Whether the remote API reported that the zone does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ZoneNotFound { .. })
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::ZoneNotFound {
                provider,
                zone_id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] DNS zone '{zone_id}' not found: {msg}")
                } else {
                    write!(f, "[{provider}] DNS zone '{zone_id}' not found")
                }
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::PermissionDenied {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Permission denied: {msg}")
                } else {
                    write!(f, "[{provider}] Permission denied")
                }
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => {
                write!(f, "[{provider}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            provider: "test".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[test] Network error: connection refused");
    }

    #[test]
    fn display_invalid_credentials_without_message() {
        let e = ProviderError::InvalidCredentials {
            provider: "bunny".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[bunny] Invalid credentials");
    }

    #[test]
    fn display_zone_not_found_with_message() {
        let e = ProviderError::ZoneNotFound {
            provider: "bunny".to_string(),
            zone_id: "999".to_string(),
            raw_message: Some("The requested DNS zone was not found".to_string()),
        };
        assert_eq!(
            e.to_string(),
            "[bunny] DNS zone '999' not found: The requested DNS zone was not found"
        );
    }

    #[test]
    fn display_zone_not_found_without_message() {
        let e = ProviderError::ZoneNotFound {
            provider: "bunny".to_string(),
            zone_id: "42".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[bunny] DNS zone '42' not found");
    }

    #[test]
    fn display_invalid_parameter() {
        let e = ProviderError::InvalidParameter {
            provider: "bunny".to_string(),
            param: "Domain".to_string(),
            detail: "invalid domain".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[bunny] Invalid parameter 'Domain': invalid domain"
        );
    }

    #[test]
    fn display_rate_limited_with_retry() {
        let e = ProviderError::RateLimited {
            provider: "bunny".to_string(),
            retry_after: Some(30),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[bunny] Rate limited (retry after 30s)");
    }

    #[test]
    fn display_unknown() {
        let e = ProviderError::Unknown {
            provider: "test".to_string(),
            raw_code: Some("500".to_string()),
            raw_message: "something broke".to_string(),
        };
        assert_eq!(e.to_string(), "[test] something broke");
    }

    #[test]
    fn not_found_is_expected() {
        let e = ProviderError::ZoneNotFound {
            provider: "bunny".to_string(),
            zone_id: "1".to_string(),
            raw_message: None,
        };
        assert!(e.is_expected());
        assert!(e.is_not_found());
    }

    #[test]
    fn network_error_is_not_expected() {
        let e = ProviderError::NetworkError {
            provider: "bunny".to_string(),
            detail: "reset".to_string(),
        };
        assert!(!e.is_expected());
        assert!(!e.is_not_found());
    }

    #[test]
    fn serialize_json_tagged_by_code() {
        let e = ProviderError::RateLimited {
            provider: "bunny".to_string(),
            retry_after: Some(60),
            raw_message: Some("too many requests".to_string()),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"RateLimited\""));
        assert!(json.contains("\"retry_after\":60"));
    }
}
