use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============ DNS Zone ============

/// A DNS zone as stored by the remote API.
///
/// Every field is nullable on the wire, so everything except the flags is an
/// `Option`. Fields the reconciler does not track (records, statistics, ...) are
/// ignored during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DnsZone {
    /// Numeric zone id, assigned by the API at creation time.
    #[serde(default)]
    pub id: Option<i64>,
    /// Zone apex domain.
    #[serde(default)]
    pub domain: Option<String>,
    /// Whether the zone uses custom nameservers.
    #[serde(default)]
    pub custom_nameservers_enabled: Option<bool>,
    /// First custom nameserver.
    #[serde(default)]
    pub nameserver1: Option<String>,
    /// Second custom nameserver.
    #[serde(default)]
    pub nameserver2: Option<String>,
    /// SOA contact email.
    #[serde(default)]
    pub soa_email: Option<String>,
    /// Whether query logging is enabled.
    #[serde(default)]
    pub logging_enabled: Option<bool>,
    /// Whether client IPs are anonymized in query logs.
    #[serde(default, rename = "LoggingIPAnonymizationEnabled")]
    pub logging_ip_anonymization_enabled: Option<bool>,
    /// Anonymization mode code (`0` = remove octet, `1` = drop IP).
    #[serde(default)]
    pub log_anonymization_type: Option<i32>,
}

/// Body of the create call. The API only accepts the domain at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DnsZoneAddOptions {
    /// Zone apex domain.
    pub domain: String,
}

/// Body of the update call.
///
/// `None` fields are omitted from the request and left unchanged by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DnsZoneUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_nameservers_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nameserver1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nameserver2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soa_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging_enabled: Option<bool>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        rename = "LoggingIPAnonymizationEnabled"
    )]
    pub logging_ip_anonymization_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_anonymization_type: Option<i32>,
}

// ============ Provider Configuration ============

/// Default API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.bunny.net";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "BUNNY_API_KEY";
/// Environment variable overriding the API endpoint.
pub const ENV_API_URL: &str = "BUNNY_API_URL";

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Provider-level configuration: where the API lives and how to authenticate.
///
/// # Serialization
///
/// ```json
/// { "apiKey": "...", "apiUrl": "https://api.bunny.net", "requestTimeoutSecs": 30 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    /// API access key, sent in the `AccessKey` header.
    pub api_key: String,
    /// API base URL, without a trailing slash.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// TCP connect timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

/// Validation error for provider configuration.
///
/// Returned when configuration fields are missing, empty, or have an invalid format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ConfigValidationError {
    /// A required field is missing entirely.
    MissingField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A field is present but empty/whitespace-only.
    EmptyField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A field is present but has an invalid format.
    InvalidFormat {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
        /// Description of what's wrong with the format.
        reason: String,
    },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { label, .. } => write!(f, "Missing required field: {label}"),
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
            Self::InvalidFormat { label, reason, .. } => write!(f, "{label}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigValidationError {}

impl ProviderConfig {
    /// Config with the given key and every other field at its default.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: default_api_url(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Build a config from a flat key-value map (the host's provider block).
    ///
    /// Keys: `apiKey` (required), `apiUrl`, `connectTimeoutSecs`, `requestTimeoutSecs`.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, ConfigValidationError> {
        let mut config = Self::new(Self::get_required_field(map, "apiKey", "API Key")?);

        if let Some(url) = map.get("apiUrl").filter(|v| !v.trim().is_empty()) {
            config.api_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(v) = map.get("connectTimeoutSecs") {
            config.connect_timeout_secs =
                Self::parse_secs(v, "connectTimeoutSecs", "Connect Timeout")?;
        }
        if let Some(v) = map.get("requestTimeoutSecs") {
            config.request_timeout_secs =
                Self::parse_secs(v, "requestTimeoutSecs", "Request Timeout")?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Build a config from `BUNNY_API_KEY` and the optional `BUNNY_API_URL`.
    pub fn from_env() -> Result<Self, ConfigValidationError> {
        let mut map = HashMap::new();
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            map.insert("apiKey".to_string(), key);
        }
        if let Ok(url) = std::env::var(ENV_API_URL) {
            map.insert("apiUrl".to_string(), url);
        }
        Self::from_map(&map)
    }

    /// Check field formats.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigValidationError::EmptyField {
                field: "apiKey".to_string(),
                label: "API Key".to_string(),
            });
        }
        if !(self.api_url.starts_with("https://") || self.api_url.starts_with("http://")) {
            return Err(ConfigValidationError::InvalidFormat {
                field: "apiUrl".to_string(),
                label: "API URL".to_string(),
                reason: format!("'{}' must start with http:// or https://", self.api_url),
            });
        }
        if self.connect_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidFormat {
                field: "requestTimeoutSecs".to_string(),
                label: "Timeout".to_string(),
                reason: "timeouts must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Obtain a required field from the map and verify that it is not empty
    fn get_required_field(
        map: &HashMap<String, String>,
        key: &str,
        label: &str,
    ) -> Result<String, ConfigValidationError> {
        match map.get(key) {
            None => Err(ConfigValidationError::MissingField {
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) if v.trim().is_empty() => Err(ConfigValidationError::EmptyField {
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) => Ok(v.trim().to_string()),
        }
    }

    fn parse_secs(value: &str, key: &str, label: &str) -> Result<u64, ConfigValidationError> {
        value
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigValidationError::InvalidFormat {
                field: key.to_string(),
                label: label.to_string(),
                reason: e.to_string(),
            })
    }
}
