//! Type definitions

mod anonymization;
mod diagnostic;
mod field_error;
mod zone;

pub use anonymization::{AnonymizationType, IP_ANONYMIZATION_FIELD};
pub use diagnostic::{Diagnostic, Diagnostics, Severity};
pub use field_error::FieldError;
pub use zone::{
    keys, CustomNameservers, DesiredZone, LoggingConfig, LoggingSettings, NameserverSettings,
    ResourceData, ZoneId, ZoneState,
};

// Re-export the API client's wire types
pub use dns_zone_provider::{DnsZone, DnsZoneAddOptions, DnsZoneUpdateOptions};
