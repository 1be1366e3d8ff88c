//! bunny.net `DnsZoneApi` implementation

use async_trait::async_trait;
use reqwest::Method;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{DnsZoneApi, ErrorContext, ProviderErrorMapper};
use crate::types::{DnsZone, DnsZoneAddOptions, DnsZoneUpdateOptions};

use super::{BunnyProvider, DNS_ZONE_PATH, PROVIDER_NAME};

impl BunnyProvider {
    fn zone_path(id: i64) -> String {
        format!("{DNS_ZONE_PATH}/{id}")
    }
}

#[async_trait]
impl DnsZoneApi for BunnyProvider {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn add_zone(&self, opts: &DnsZoneAddOptions) -> Result<DnsZone> {
        let zone: DnsZone = self
            .post(DNS_ZONE_PATH, opts, ErrorContext::default())
            .await?;
        log::info!("[{PROVIDER_NAME}] Created DNS zone {:?} ({})", zone.id, opts.domain);
        Ok(zone)
    }

    async fn get_zone(&self, id: i64) -> Result<DnsZone> {
        self.get(&Self::zone_path(id), ErrorContext::zone(id)).await
    }

    async fn update_zone(&self, id: i64, opts: &DnsZoneUpdateOptions) -> Result<DnsZone> {
        let text = self
            .send(
                Method::POST,
                &Self::zone_path(id),
                Some(opts),
                ErrorContext::zone(id),
            )
            .await?;

        // Some API versions answer 204 No Content; fetch the stored zone instead
        if text.trim().is_empty() {
            return self.get_zone(id).await;
        }
        HttpUtils::parse_json(&text, self.provider_name())
    }

    async fn delete_zone(&self, id: i64) -> Result<()> {
        self.delete(&Self::zone_path(id), ErrorContext::zone(id))
            .await?;
        log::info!("[{PROVIDER_NAME}] Deleted DNS zone {id}");
        Ok(())
    }
}
