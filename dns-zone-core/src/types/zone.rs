//! DNS zone resource records: desired state, cached state, per-instance data

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::{AnonymizationType, FieldError};
use crate::error::{CoreError, CoreResult};

/// Attribute keys of the DNS zone resource.
pub mod keys {
    pub const ID: &str = "id";
    pub const DOMAIN: &str = "domain";
    pub const CUSTOM_NAMESERVERS: &str = "custom_nameservers";
    pub const LOGGING: &str = "logging";
    pub const ENABLED: &str = "enabled";
    pub const SOA_EMAIL: &str = "soa_email";
    pub const NAMESERVER_1: &str = "nameserver_1";
    pub const NAMESERVER_2: &str = "nameserver_2";
    pub const IP_ANONYMIZATION: &str = "ip_anonymization";
    pub const IP_ANONYMIZATION_ENABLED: &str = "ip_anonymization_enabled";
    pub const LAST_UPDATED: &str = "last_updated";
}

// ============ ZoneId ============

/// Zone identifier.
///
/// The API uses a 64-bit integer; the host stores it as its decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZoneId(i64);

impl ZoneId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for ZoneId {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| CoreError::InvalidId(s.to_string()))
    }
}

impl TryFrom<String> for ZoneId {
    type Error = CoreError;

    fn try_from(s: String) -> CoreResult<Self> {
        s.parse()
    }
}

impl From<ZoneId> for String {
    fn from(id: ZoneId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============ Desired state ============

/// Custom nameserver block of the desired state. All three fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomNameservers {
    pub soa_email: String,
    pub nameserver_1: String,
    pub nameserver_2: String,
}

/// Logging block of the desired state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Anonymization mode name, kept as written so update can degrade on bad input.
    pub ip_anonymization: Option<String>,
}

/// Desired state of a DNS zone, as written by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesiredZone {
    /// Zone apex; changing it forces a new zone.
    pub domain: String,
    pub custom_nameservers: Option<CustomNameservers>,
    pub logging: Option<LoggingConfig>,
}

impl DesiredZone {
    /// Desired state with only the domain set.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            custom_nameservers: None,
            logging: None,
        }
    }

    /// Parse the host's string-keyed document.
    ///
    /// Blocks may be an object or a list of at most one object; `null` or an
    /// empty list means the block is absent. Computed attributes (`enabled`,
    /// `ip_anonymization_enabled`, `id`, `last_updated`) are ignored.
    pub fn from_document(doc: &Value) -> Result<Self, FieldError> {
        let Value::Object(doc) = doc else {
            return Err(FieldError::InvalidFormat {
                field: "<root>".to_string(),
                reason: "expected an object".to_string(),
            });
        };

        let domain = required_str(doc, keys::DOMAIN, keys::DOMAIN)?;

        let custom_nameservers = block(doc, keys::CUSTOM_NAMESERVERS)?
            .map(|ns| -> Result<_, FieldError> {
                let path = |k: &str| format!("{}.{k}", keys::CUSTOM_NAMESERVERS);
                Ok(CustomNameservers {
                    soa_email: required_str(ns, keys::SOA_EMAIL, &path(keys::SOA_EMAIL))?,
                    nameserver_1: required_str(ns, keys::NAMESERVER_1, &path(keys::NAMESERVER_1))?,
                    nameserver_2: required_str(ns, keys::NAMESERVER_2, &path(keys::NAMESERVER_2))?,
                })
            })
            .transpose()?;

        let logging = block(doc, keys::LOGGING)?
            .map(|lg| -> Result<_, FieldError> {
                let path = format!("{}.{}", keys::LOGGING, keys::IP_ANONYMIZATION);
                Ok(LoggingConfig {
                    ip_anonymization: optional_str(lg, keys::IP_ANONYMIZATION, &path)?,
                })
            })
            .transpose()?;

        Ok(Self {
            domain,
            custom_nameservers,
            logging,
        })
    }

    /// Check enumerated values against their tables.
    ///
    /// Parsing keeps the anonymization name as written; this is the check that
    /// rejects unknown names before anything is planned.
    pub fn validate(&self) -> Result<(), FieldError> {
        if let Some(name) = self
            .logging
            .as_ref()
            .and_then(|l| l.ip_anonymization.as_deref())
        {
            AnonymizationType::from_name(name)?;
        }
        Ok(())
    }
}

/// Resolve a block that may be an object or a list of at most one object.
fn block<'a>(
    doc: &'a Map<String, Value>,
    field: &str,
) -> Result<Option<&'a Map<String, Value>>, FieldError> {
    let not_object = || FieldError::InvalidFormat {
        field: field.to_string(),
        reason: "expected an object or a list of one object".to_string(),
    };

    match doc.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(m)) => Ok(Some(m)),
        Some(Value::Array(items)) => match items.as_slice() {
            [] => Ok(None),
            [Value::Object(m)] => Ok(Some(m)),
            [_] => Err(not_object()),
            many => Err(FieldError::TooManyItems {
                field: field.to_string(),
                max: 1,
                actual: many.len(),
            }),
        },
        Some(_) => Err(not_object()),
    }
}

fn required_str(map: &Map<String, Value>, key: &str, path: &str) -> Result<String, FieldError> {
    match optional_str(map, key, path)? {
        None if map.get(key).is_some_and(|v| !v.is_null()) => Err(FieldError::Empty {
            field: path.to_string(),
        }),
        None => Err(FieldError::Missing {
            field: path.to_string(),
        }),
        Some(v) => Ok(v),
    }
}

/// A string attribute; absent, `null` and blank all read as `None`.
///
/// Non-blank values are kept verbatim, surrounding whitespace included.
fn optional_str(map: &Map<String, Value>, key: &str, path: &str) -> Result<Option<String>, FieldError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(FieldError::InvalidFormat {
            field: path.to_string(),
            reason: format!("expected a string, got {other}"),
        }),
    }
}

// ============ Cached state ============

/// Nameserver settings as reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameserverSettings {
    pub enabled: bool,
    pub soa_email: Option<String>,
    pub nameserver_1: Option<String>,
    pub nameserver_2: Option<String>,
}

/// Logging settings as reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub enabled: bool,
    pub ip_anonymization_enabled: bool,
    pub ip_anonymization: Option<AnonymizationType>,
}

/// Cached state of a DNS zone, always derived from what the API reported.
///
/// Both blocks are always present, whether or not the user configured them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneState {
    pub id: ZoneId,
    pub domain: String,
    pub custom_nameservers: NameserverSettings,
    pub logging: LoggingSettings,
}

impl ZoneState {
    /// Render in the host's document shape, blocks as single-element lists.
    pub fn to_document(&self) -> Value {
        let ns = &self.custom_nameservers;
        let lg = &self.logging;
        json!({
            (keys::ID): self.id.to_string(),
            (keys::DOMAIN): self.domain,
            (keys::CUSTOM_NAMESERVERS): [{
                (keys::ENABLED): ns.enabled,
                (keys::SOA_EMAIL): ns.soa_email.as_deref().unwrap_or_default(),
                (keys::NAMESERVER_1): ns.nameserver_1.as_deref().unwrap_or_default(),
                (keys::NAMESERVER_2): ns.nameserver_2.as_deref().unwrap_or_default(),
            }],
            (keys::LOGGING): [{
                (keys::ENABLED): lg.enabled,
                (keys::IP_ANONYMIZATION_ENABLED): lg.ip_anonymization_enabled,
                (keys::IP_ANONYMIZATION): lg.ip_anonymization.map(AnonymizationType::name).unwrap_or_default(),
            }],
        })
    }
}

// ============ Per-instance record ============

/// The host's per-instance record for one DNS zone resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceData {
    pub id: Option<ZoneId>,
    pub state: Option<ZoneState>,
    /// Last successful write to the remote zone.
    #[serde(default, with = "crate::utils::datetime::rfc850_option")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl ResourceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record tracking an existing zone, state still unknown.
    pub fn with_id(id: ZoneId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// The tracked zone id.
    pub fn require_id(&self) -> CoreResult<ZoneId> {
        self.id.ok_or(CoreError::MissingId)
    }

    /// Overwrite the cached state, keeping the id invariant.
    pub(crate) fn set_state(&mut self, state: ZoneState) -> CoreResult<()> {
        match self.id {
            Some(id) if id != state.id => Err(CoreError::StateConversion(format!(
                "API returned zone {} for resource {id}",
                state.id
            ))),
            _ => {
                self.id = Some(state.id);
                self.state = Some(state);
                Ok(())
            }
        }
    }

    /// Forget the remote zone.
    pub(crate) fn clear(&mut self) {
        self.id = None;
        self.state = None;
    }

    /// `last_updated` as the host displays it.
    pub fn last_updated_rfc850(&self) -> Option<String> {
        self.last_updated.map(crate::utils::datetime::format_rfc850)
    }
}
