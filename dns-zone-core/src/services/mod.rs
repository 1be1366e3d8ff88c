//! Business logic service layer

mod dns_zone_service;
mod plan;
mod translate;

pub use dns_zone_service::{CreateOutcome, CreatePhase, DnsZoneService, ReadOutcome};
pub use plan::{plan, ZonePlan};
pub use translate::{add_options, update_options, zone_state_from_remote};
