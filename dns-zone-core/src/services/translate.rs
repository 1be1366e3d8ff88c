//! Translation between resource records and API payloads

use dns_zone_provider::{DnsZone, DnsZoneAddOptions, DnsZoneUpdateOptions};

use crate::error::{CoreError, CoreResult};
use crate::types::{
    AnonymizationType, DesiredZone, LoggingSettings, NameserverSettings, ZoneId, ZoneState,
};

/// Creation payload. The API only takes the domain at creation time.
pub fn add_options(desired: &DesiredZone) -> DnsZoneAddOptions {
    DnsZoneAddOptions {
        domain: desired.domain.clone(),
    }
}

/// Update payload carrying every mutable attribute of the desired state.
///
/// An absent block switches the feature off. An anonymization name that is
/// missing or not in the table switches IP anonymization off instead of
/// failing the update.
pub fn update_options(desired: &DesiredZone) -> DnsZoneUpdateOptions {
    let mut opts = DnsZoneUpdateOptions::default();

    match &desired.custom_nameservers {
        None => opts.custom_nameservers_enabled = Some(false),
        Some(ns) => {
            opts.custom_nameservers_enabled = Some(true);
            opts.nameserver1 = Some(ns.nameserver_1.clone());
            opts.nameserver2 = Some(ns.nameserver_2.clone());
            opts.soa_email = Some(ns.soa_email.clone());
        }
    }

    match &desired.logging {
        None => {
            opts.logging_enabled = Some(false);
            opts.logging_ip_anonymization_enabled = Some(false);
        }
        Some(logging) => {
            opts.logging_enabled = Some(true);
            match logging.ip_anonymization.as_deref().map(AnonymizationType::from_name) {
                Some(Ok(t)) => {
                    opts.logging_ip_anonymization_enabled = Some(true);
                    opts.log_anonymization_type = Some(t.code());
                }
                Some(Err(e)) => {
                    log::warn!("{}: disabling IP anonymization: {e}", desired.domain);
                    opts.logging_ip_anonymization_enabled = Some(false);
                }
                None => {
                    log::debug!("{}: no IP anonymization requested", desired.domain);
                    opts.logging_ip_anonymization_enabled = Some(false);
                }
            }
        }
    }

    opts
}

/// Cached state from an API zone. Both blocks are always filled in.
pub fn zone_state_from_remote(zone: &DnsZone) -> CoreResult<ZoneState> {
    let id = zone
        .id
        .map(ZoneId::new)
        .ok_or_else(|| CoreError::StateConversion("zone has no Id".to_string()))?;
    let domain = zone
        .domain
        .clone()
        .ok_or_else(|| CoreError::StateConversion(format!("zone {id} has no Domain")))?;
    let ip_anonymization = zone
        .log_anonymization_type
        .map(AnonymizationType::from_code)
        .transpose()
        .map_err(|e| CoreError::StateConversion(e.to_string()))?;

    Ok(ZoneState {
        id,
        domain,
        custom_nameservers: NameserverSettings {
            enabled: zone.custom_nameservers_enabled.unwrap_or(false),
            soa_email: zone.soa_email.clone(),
            nameserver_1: zone.nameserver1.clone(),
            nameserver_2: zone.nameserver2.clone(),
        },
        logging: LoggingSettings {
            enabled: zone.logging_enabled.unwrap_or(false),
            ip_anonymization_enabled: zone.logging_ip_anonymization_enabled.unwrap_or(false),
            ip_anonymization,
        },
    })
}
