//! DNS Zone Core Library
//!
//! Lifecycle handlers for a DNS zone resource managed by an
//! infrastructure-as-code host:
//! - Create / Read / Update / Delete / Import ([`DnsZoneService`])
//! - Desired-state parsing and validation ([`DesiredZone`])
//! - Diff planning ([`plan`])
//! - Attribute schema ([`schema::dns_zone_attributes`])
//!
//! The remote API is reached through the [`dns_zone_provider::DnsZoneApi`]
//! trait, so the host (or a test) can plug in any implementation.

pub mod context;
pub mod error;
pub mod schema;
pub mod services;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use context::OperationContext;
pub use error::{CoreError, CoreResult};
pub use services::{
    plan, CreateOutcome, CreatePhase, DnsZoneService, ReadOutcome, ZonePlan,
};
pub use types::{
    AnonymizationType, DesiredZone, Diagnostic, Diagnostics, FieldError, ResourceData, Severity,
    ZoneId, ZoneState,
};
