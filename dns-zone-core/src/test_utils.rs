//! Test helpers
//!
//! In-memory API mock and factory functions.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use dns_zone_provider::{
    DnsZone, DnsZoneAddOptions, DnsZoneApi, DnsZoneUpdateOptions, ProviderError, Result,
};
use tokio::sync::RwLock;

use crate::services::DnsZoneService;
use crate::types::{CustomNameservers, DesiredZone, LoggingConfig};

/// First id handed out by the mock.
const FIRST_ZONE_ID: i64 = 42;

// ===== MockDnsZoneApi =====

/// Deterministic in-memory stand-in for the remote API.
pub struct MockDnsZoneApi {
    zones: RwLock<HashMap<i64, DnsZone>>,
    next_id: RwLock<i64>,
    calls: RwLock<Vec<&'static str>>,
    last_update: RwLock<Option<DnsZoneUpdateOptions>>,
    /// If Some, the matching call returns this error
    add_error: RwLock<Option<ProviderError>>,
    get_error: RwLock<Option<ProviderError>>,
    update_error: RwLock<Option<ProviderError>>,
    delete_error: RwLock<Option<ProviderError>>,
    /// If true, the matching call never completes (for cancellation tests)
    stall_adds: RwLock<bool>,
    stall_updates: RwLock<bool>,
    /// If true, add_zone stores the zone but answers without its Id
    omit_created_id: RwLock<bool>,
}

impl MockDnsZoneApi {
    pub fn new() -> Self {
        Self {
            zones: RwLock::new(HashMap::new()),
            next_id: RwLock::new(FIRST_ZONE_ID),
            calls: RwLock::new(Vec::new()),
            last_update: RwLock::new(None),
            add_error: RwLock::new(None),
            get_error: RwLock::new(None),
            update_error: RwLock::new(None),
            delete_error: RwLock::new(None),
            stall_adds: RwLock::new(false),
            stall_updates: RwLock::new(false),
            omit_created_id: RwLock::new(false),
        }
    }

    pub async fn set_add_error(&self, err: Option<ProviderError>) {
        *self.add_error.write().await = err;
    }

    pub async fn set_get_error(&self, err: Option<ProviderError>) {
        *self.get_error.write().await = err;
    }

    pub async fn set_update_error(&self, err: Option<ProviderError>) {
        *self.update_error.write().await = err;
    }

    pub async fn set_delete_error(&self, err: Option<ProviderError>) {
        *self.delete_error.write().await = err;
    }

    pub async fn stall_adds(&self, stall: bool) {
        *self.stall_adds.write().await = stall;
    }

    pub async fn stall_updates(&self, stall: bool) {
        *self.stall_updates.write().await = stall;
    }

    pub async fn omit_created_id(&self, omit: bool) {
        *self.omit_created_id.write().await = omit;
    }

    /// Seed a zone as if it had been created out of band.
    pub async fn insert_zone(&self, zone: DnsZone) {
        let id = zone.id.unwrap_or_default();
        self.zones.write().await.insert(id, zone);
    }

    pub async fn zone(&self, id: i64) -> Option<DnsZone> {
        self.zones.read().await.get(&id).cloned()
    }

    pub async fn last_update(&self) -> Option<DnsZoneUpdateOptions> {
        self.last_update.read().await.clone()
    }

    /// Number of remote calls made so far.
    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }

    async fn record(&self, call: &'static str) {
        self.calls.write().await.push(call);
    }

    fn not_found(id: i64) -> ProviderError {
        ProviderError::ZoneNotFound {
            provider: "mock".to_string(),
            zone_id: id.to_string(),
            raw_message: Some("The requested DNS zone was not found".to_string()),
        }
    }
}

#[async_trait]
impl DnsZoneApi for MockDnsZoneApi {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn add_zone(&self, opts: &DnsZoneAddOptions) -> Result<DnsZone> {
        self.record("add_zone").await;
        let stall = *self.stall_adds.read().await;
        if stall {
            std::future::pending::<()>().await;
        }
        if let Some(ref err) = *self.add_error.read().await {
            return Err(err.clone());
        }

        let mut next_id = self.next_id.write().await;
        let id = *next_id;
        *next_id += 1;

        let zone = DnsZone {
            id: Some(id),
            domain: Some(opts.domain.clone()),
            custom_nameservers_enabled: Some(false),
            logging_enabled: Some(false),
            logging_ip_anonymization_enabled: Some(false),
            ..Default::default()
        };
        self.zones.write().await.insert(id, zone.clone());
        if *self.omit_created_id.read().await {
            return Ok(DnsZone { id: None, ..zone });
        }
        Ok(zone)
    }

    async fn get_zone(&self, id: i64) -> Result<DnsZone> {
        self.record("get_zone").await;
        if let Some(ref err) = *self.get_error.read().await {
            return Err(err.clone());
        }
        self.zone(id).await.ok_or_else(|| Self::not_found(id))
    }

    async fn update_zone(&self, id: i64, opts: &DnsZoneUpdateOptions) -> Result<DnsZone> {
        self.record("update_zone").await;
        let stall = *self.stall_updates.read().await;
        if stall {
            std::future::pending::<()>().await;
        }
        *self.last_update.write().await = Some(opts.clone());
        if let Some(ref err) = *self.update_error.read().await {
            return Err(err.clone());
        }

        let mut zones = self.zones.write().await;
        let zone = zones.get_mut(&id).ok_or_else(|| Self::not_found(id))?;
        if let Some(v) = opts.custom_nameservers_enabled {
            zone.custom_nameservers_enabled = Some(v);
        }
        if opts.nameserver1.is_some() {
            zone.nameserver1.clone_from(&opts.nameserver1);
        }
        if opts.nameserver2.is_some() {
            zone.nameserver2.clone_from(&opts.nameserver2);
        }
        if opts.soa_email.is_some() {
            zone.soa_email.clone_from(&opts.soa_email);
        }
        if let Some(v) = opts.logging_enabled {
            zone.logging_enabled = Some(v);
        }
        if let Some(v) = opts.logging_ip_anonymization_enabled {
            zone.logging_ip_anonymization_enabled = Some(v);
        }
        if let Some(v) = opts.log_anonymization_type {
            zone.log_anonymization_type = Some(v);
        }
        Ok(zone.clone())
    }

    async fn delete_zone(&self, id: i64) -> Result<()> {
        self.record("delete_zone").await;
        if let Some(ref err) = *self.delete_error.read().await {
            return Err(err.clone());
        }
        self.zones
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }
}

// ===== Factories =====

/// A service wired to a fresh mock
pub fn create_test_service() -> (DnsZoneService, Arc<MockDnsZoneApi>) {
    let api = Arc::new(MockDnsZoneApi::new());
    (DnsZoneService::new(api.clone()), api)
}

/// Desired state with both blocks set
pub fn desired_full(domain: &str) -> DesiredZone {
    DesiredZone {
        domain: domain.to_string(),
        custom_nameservers: Some(CustomNameservers {
            soa_email: format!("hostmaster@{domain}"),
            nameserver_1: "ns1.example.net".to_string(),
            nameserver_2: "ns2.example.net".to_string(),
        }),
        logging: Some(LoggingConfig {
            ip_anonymization: Some("drop_ip".to_string()),
        }),
    }
}

/// A transient transport failure
pub fn network_error() -> ProviderError {
    ProviderError::NetworkError {
        provider: "mock".to_string(),
        detail: "connection reset by peer".to_string(),
    }
}
