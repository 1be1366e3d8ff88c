//! DNS zone resource lifecycle service

use std::sync::Arc;

use chrono::Utc;
use dns_zone_provider::{create_client, DnsZoneApi, ProviderConfig, ProviderError};
use serde::Serialize;

use super::plan::{plan, ZonePlan};
use super::translate::{add_options, update_options, zone_state_from_remote};
use crate::context::OperationContext;
use crate::error::{CoreError, CoreResult};
use crate::types::{DesiredZone, Diagnostic, Diagnostics, ResourceData, ZoneId, ZoneState};

/// Where a create stands.
///
/// `Creating -> Enriching -> Ready`, or `Creating -> Enriching ->
/// PartiallyCreated` when the follow-up update fails. Only
/// [`DnsZoneService::create`] moves between phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatePhase {
    /// Remote create in flight.
    Creating,
    /// Zone exists; remaining attributes being set via update.
    Enriching,
    /// Zone exists with every attribute set.
    Ready,
    /// Zone exists but the update failed; cached state comes from the create response.
    PartiallyCreated,
}

impl CreatePhase {
    /// Next phase once the current step finished (`ok`) or failed.
    fn advance(self, ok: bool) -> Self {
        match (self, ok) {
            (Self::Creating, true) => Self::Enriching,
            (Self::Enriching, true) => Self::Ready,
            (Self::Enriching, false) => Self::PartiallyCreated,
            (terminal, _) => terminal,
        }
    }

    /// Whether the zone exists remotely in this phase.
    pub fn zone_exists(self) -> bool {
        !matches!(self, Self::Creating)
    }
}

/// Result of [`DnsZoneService::create`].
#[derive(Debug, Clone, Serialize)]
pub struct CreateOutcome {
    pub id: ZoneId,
    pub phase: CreatePhase,
    pub diagnostics: Diagnostics,
}

/// Result of [`DnsZoneService::read`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "state", rename_all = "snake_case")]
pub enum ReadOutcome {
    /// The zone exists; cached state refreshed.
    Found(ZoneState),
    /// The zone no longer exists remotely; the record was cleared.
    Gone,
}

/// DNS zone resource service
///
/// Drives create/read/update/delete/import for one resource instance at a time.
/// The host serializes calls per instance, so the service keeps no locks.
pub struct DnsZoneService {
    api: Arc<dyn DnsZoneApi>,
}

impl DnsZoneService {
    /// Create a service backed by the given API client
    #[must_use]
    pub fn new(api: Arc<dyn DnsZoneApi>) -> Self {
        Self { api }
    }

    /// Create a service talking to the real API.
    pub fn from_config(config: &ProviderConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self::new(create_client(config)?))
    }

    /// Create the zone, then set the attributes the create call cannot take.
    ///
    /// Failing to create is an error. Failing afterwards is not: the zone
    /// exists and stays tracked, and the failure comes back as a warning.
    pub async fn create(
        &self,
        ctx: &OperationContext,
        desired: &DesiredZone,
        data: &mut ResourceData,
    ) -> CoreResult<CreateOutcome> {
        let mut phase = CreatePhase::Creating;
        log::debug!("Creating DNS zone {}", desired.domain);

        let created = ctx
            .run(self.api.add_zone(&add_options(desired)))
            .await?
            .map_err(|e| remote_error("creating DNS zone failed", e))?;
        let Some(id) = created.id.map(ZoneId::new) else {
            // The zone exists remotely but cannot be tracked
            log::error!(
                "DNS zone {} was created but the API returned no Id; it is not tracked",
                desired.domain
            );
            return Err(CoreError::StateConversion(format!(
                "API created zone {} without Id",
                desired.domain
            )));
        };

        data.clear();
        data.id = Some(id);
        data.last_updated = Some(Utc::now());
        phase = phase.advance(true);
        log::info!("Created DNS zone {} ({id})", desired.domain);

        let mut diagnostics = Diagnostics::new();
        let enriched = self.update(ctx, desired, data).await;
        phase = phase.advance(enriched.is_ok());

        if let Err(e) = enriched {
            log::warn!("DNS zone {id} created but setting its attributes failed: {e}");
            diagnostics.push(Diagnostic::warning(
                "setting DNS zone attributes via update failed",
                e.to_string(),
            ));
            if let Err(conv) = zone_state_from_remote(&created).and_then(|s| data.set_state(s)) {
                diagnostics.push(Diagnostic::warning(
                    "converting API zone to resource data failed",
                    conv.to_string(),
                ));
            }
        }

        Ok(CreateOutcome {
            id,
            phase,
            diagnostics,
        })
    }

    /// Refresh the cached state from the API.
    ///
    /// Leaves `last_updated` alone. A zone deleted out of band yields
    /// [`ReadOutcome::Gone`] and clears the record.
    pub async fn read(
        &self,
        ctx: &OperationContext,
        data: &mut ResourceData,
    ) -> CoreResult<ReadOutcome> {
        let id = data.require_id()?;

        match ctx.run(self.api.get_zone(id.get())).await? {
            Ok(zone) => {
                let state = zone_state_from_remote(&zone)?;
                data.set_state(state.clone())?;
                Ok(ReadOutcome::Found(state))
            }
            Err(e) if e.is_not_found() => {
                log::warn!("DNS zone {id} no longer exists, removing it from state");
                data.clear();
                Ok(ReadOutcome::Gone)
            }
            Err(e) => Err(remote_error("could not retrieve DNS zone", e)),
        }
    }

    /// Push the mutable attributes of `desired` to the API.
    ///
    /// The cached state is only touched once the API accepted the update.
    pub async fn update(
        &self,
        ctx: &OperationContext,
        desired: &DesiredZone,
        data: &mut ResourceData,
    ) -> CoreResult<ZoneState> {
        let id = data.require_id()?;
        let opts = update_options(desired);

        let updated = ctx
            .run(self.api.update_zone(id.get(), &opts))
            .await?
            .map_err(|e| remote_error("updating DNS zone via API failed", e))?;
        let state = zone_state_from_remote(&updated)?;

        data.set_state(state.clone())?;
        data.last_updated = Some(Utc::now());
        log::debug!("Updated DNS zone {id}");
        Ok(state)
    }

    /// Delete the zone. A zone that is already gone counts as deleted.
    pub async fn delete(&self, ctx: &OperationContext, data: &mut ResourceData) -> CoreResult<()> {
        let Some(id) = data.id else {
            log::debug!("No DNS zone tracked, nothing to delete");
            return Ok(());
        };

        match ctx.run(self.api.delete_zone(id.get())).await? {
            Ok(()) => {}
            Err(e) if e.is_not_found() => {
                log::info!("DNS zone {id} already deleted");
            }
            Err(e) => return Err(remote_error("could not delete DNS zone", e)),
        }

        data.clear();
        Ok(())
    }

    /// Start tracking an existing zone by its external id.
    ///
    /// The id must be the decimal form of an i64, exactly as written. A read
    /// fills in the rest.
    pub fn import(&self, external_id: &str) -> CoreResult<ResourceData> {
        let id: ZoneId = external_id.parse()?;
        if id.to_string() != external_id {
            return Err(CoreError::InvalidId(external_id.to_string()));
        }
        log::info!("Importing DNS zone {id} via {}", self.api.id());
        Ok(ResourceData::with_id(id))
    }

    /// Carry out a plan computed by [`plan`].
    ///
    /// `Replace` deletes the tracked zone and creates a new one.
    pub async fn apply(
        &self,
        ctx: &OperationContext,
        zone_plan: ZonePlan,
        desired: &DesiredZone,
        data: &mut ResourceData,
    ) -> CoreResult<Diagnostics> {
        match zone_plan {
            ZonePlan::NoOp => Ok(Diagnostics::new()),
            ZonePlan::Update => {
                self.update(ctx, desired, data).await?;
                Ok(Diagnostics::new())
            }
            ZonePlan::Create => Ok(self.create(ctx, desired, data).await?.diagnostics),
            ZonePlan::Replace => {
                self.delete(ctx, data).await?;
                ctx.check()?;
                Ok(self.create(ctx, desired, data).await?.diagnostics)
            }
        }
    }

    /// Plan against the cached state and apply the plan.
    pub async fn reconcile(
        &self,
        ctx: &OperationContext,
        desired: &DesiredZone,
        data: &mut ResourceData,
    ) -> CoreResult<(ZonePlan, Diagnostics)> {
        let zone_plan = plan(desired, data.state.as_ref())?;
        log::debug!("Plan for DNS zone {}: {zone_plan:?}", desired.domain);
        let diagnostics = self.apply(ctx, zone_plan, desired, data).await?;
        Ok((zone_plan, diagnostics))
    }
}

/// Log a provider error at the level its kind warrants and wrap it.
fn remote_error(operation: &str, err: ProviderError) -> CoreError {
    if err.is_expected() {
        log::warn!("{operation}: {err}");
    } else {
        log::error!("{operation}: {err}");
    }
    CoreError::remote(operation, err)
}
