//! Static attribute description of the DNS zone resource
//!
//! The host uses this to build its schema: which attributes exist, which the
//! user sets and which the service computes.

use serde::{Deserialize, Serialize};

use crate::types::{keys, AnonymizationType};

/// Value kind of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    String,
    Bool,
    /// Nested block; see [`AttributeSchema::children`].
    Block,
}

/// Who provides an attribute's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Required,
    Optional,
    /// Set by the service from what the API reports.
    Computed,
}

/// Definition of a single resource attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSchema {
    pub name: &'static str,
    pub kind: AttributeKind,
    pub presence: Presence,
    /// Changing the value replaces the zone.
    pub force_new: bool,
    /// Upper bound on block elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AttributeSchema>,
}

impl AttributeSchema {
    fn leaf(name: &'static str, kind: AttributeKind, presence: Presence) -> Self {
        Self {
            name,
            kind,
            presence,
            force_new: false,
            max_items: None,
            description: String::new(),
            children: Vec::new(),
        }
    }

    fn block(name: &'static str, children: Vec<Self>) -> Self {
        Self {
            max_items: Some(1),
            children,
            ..Self::leaf(name, AttributeKind::Block, Presence::Optional)
        }
    }

    fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Attribute table of the DNS zone resource.
pub fn dns_zone_attributes() -> Vec<AttributeSchema> {
    use AttributeKind::{Bool, String as Str};
    use Presence::{Computed, Optional, Required};

    vec![
        AttributeSchema::leaf(keys::ID, Str, Computed).describe("Numeric zone id"),
        AttributeSchema {
            force_new: true,
            ..AttributeSchema::leaf(keys::DOMAIN, Str, Required)
        }
        .describe("The domain for the DNS Zone"),
        AttributeSchema::block(
            keys::CUSTOM_NAMESERVERS,
            vec![
                AttributeSchema::leaf(keys::ENABLED, Bool, Computed),
                AttributeSchema::leaf(keys::SOA_EMAIL, Str, Required),
                AttributeSchema::leaf(keys::NAMESERVER_1, Str, Required),
                AttributeSchema::leaf(keys::NAMESERVER_2, Str, Required),
            ],
        )
        .describe("Custom nameservers; omit to use the provider's nameservers"),
        AttributeSchema::block(
            keys::LOGGING,
            vec![
                AttributeSchema::leaf(keys::ENABLED, Bool, Computed),
                AttributeSchema::leaf(keys::IP_ANONYMIZATION_ENABLED, Bool, Computed),
                AttributeSchema::leaf(keys::IP_ANONYMIZATION, Str, Optional).describe(format!(
                    "The type of anonymization.\nValid values: {}",
                    AnonymizationType::valid_names().join(", ")
                )),
            ],
        )
        .describe("Query logging; omit to disable it"),
        AttributeSchema::leaf(keys::LAST_UPDATED, Str, Computed)
            .describe("Time of the last successful write, RFC 850"),
    ]
}
