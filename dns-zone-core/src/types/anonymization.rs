//! Query log IP anonymization modes

use std::fmt;

use serde::{Deserialize, Serialize};

use super::FieldError;

/// Attribute path of the anonymization name in the desired-state document.
pub const IP_ANONYMIZATION_FIELD: &str = "logging.ip_anonymization";

/// Wire field carrying the anonymization code.
const LOG_ANONYMIZATION_TYPE_FIELD: &str = "LogAnonymizationType";

/// How client IPs are anonymized in query logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnonymizationType {
    /// Zero the last octet of the address (code `0`).
    RemoveOctet,
    /// Drop the address entirely (code `1`).
    DropIp,
}

/// Name/code table; both lookup directions are derived from it.
const ANONYMIZATION_TABLE: [(AnonymizationType, &str, i32); 2] = [
    (AnonymizationType::RemoveOctet, "remove_octet", 0),
    (AnonymizationType::DropIp, "drop_ip", 1),
];

impl AnonymizationType {
    /// Name used in desired-state documents.
    pub fn name(self) -> &'static str {
        ANONYMIZATION_TABLE
            .iter()
            .find(|(t, _, _)| *t == self)
            .map_or("", |(_, name, _)| *name)
    }

    /// Integer code used on the wire.
    pub fn code(self) -> i32 {
        ANONYMIZATION_TABLE
            .iter()
            .find(|(t, _, _)| *t == self)
            .map_or(-1, |(_, _, code)| *code)
    }

    /// Look up a mode by its document name.
    pub fn from_name(name: &str) -> Result<Self, FieldError> {
        ANONYMIZATION_TABLE
            .iter()
            .find(|(_, n, _)| *n == name)
            .map(|(t, _, _)| *t)
            .ok_or_else(|| FieldError::UnsupportedValue {
                field: IP_ANONYMIZATION_FIELD.to_string(),
                value: name.to_string(),
                valid: Self::valid_names().iter().map(ToString::to_string).collect(),
            })
    }

    /// Look up a mode by its wire code.
    pub fn from_code(code: i32) -> Result<Self, FieldError> {
        ANONYMIZATION_TABLE
            .iter()
            .find(|(_, _, c)| *c == code)
            .map(|(t, _, _)| *t)
            .ok_or_else(|| FieldError::UnsupportedValue {
                field: LOG_ANONYMIZATION_TYPE_FIELD.to_string(),
                value: code.to_string(),
                valid: ANONYMIZATION_TABLE
                    .iter()
                    .map(|(_, _, c)| c.to_string())
                    .collect(),
            })
    }

    /// Every accepted document name, sorted.
    pub fn valid_names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = ANONYMIZATION_TABLE.iter().map(|(_, n, _)| *n).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Display for AnonymizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
