//! Diff between desired and cached state

use serde::Serialize;

use crate::error::CoreResult;
use crate::types::{
    AnonymizationType, CustomNameservers, DesiredZone, LoggingConfig, LoggingSettings,
    NameserverSettings, ZoneState,
};

/// What it takes to converge a zone on its desired state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ZonePlan {
    /// Nothing is tracked yet.
    Create,
    /// The domain changed; the zone has to be deleted and recreated.
    Replace,
    /// Mutable attributes differ.
    Update,
    NoOp,
}

/// Validate `desired` and compare it against the cached state.
///
/// An absent block in `desired` matches a cached block that is switched off:
/// the API always reports both blocks.
pub fn plan(desired: &DesiredZone, prior: Option<&ZoneState>) -> CoreResult<ZonePlan> {
    desired.validate()?;

    let Some(prior) = prior else {
        return Ok(ZonePlan::Create);
    };
    if prior.domain != desired.domain {
        return Ok(ZonePlan::Replace);
    }

    let converged = nameservers_match(desired.custom_nameservers.as_ref(), &prior.custom_nameservers)
        && logging_matches(desired.logging.as_ref(), &prior.logging);
    Ok(if converged {
        ZonePlan::NoOp
    } else {
        ZonePlan::Update
    })
}

fn nameservers_match(desired: Option<&CustomNameservers>, cached: &NameserverSettings) -> bool {
    match desired {
        None => !cached.enabled,
        Some(ns) => {
            cached.enabled
                && cached.soa_email.as_deref() == Some(ns.soa_email.as_str())
                && cached.nameserver_1.as_deref() == Some(ns.nameserver_1.as_str())
                && cached.nameserver_2.as_deref() == Some(ns.nameserver_2.as_str())
        }
    }
}

fn logging_matches(desired: Option<&LoggingConfig>, cached: &LoggingSettings) -> bool {
    match desired {
        None => !cached.enabled,
        Some(logging) => {
            cached.enabled
                && match logging.ip_anonymization.as_deref() {
                    None => !cached.ip_anonymization_enabled,
                    Some(name) => {
                        cached.ip_anonymization_enabled
                            && cached.ip_anonymization.map(AnonymizationType::name) == Some(name)
                    }
                }
        }
    }
}
