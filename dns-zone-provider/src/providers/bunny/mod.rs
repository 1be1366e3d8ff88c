//! bunny.net DNS zone API

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::types::ProviderConfig;
use crate::utils::log_sanitizer::mask_secret;

pub(crate) use types::BunnyErrorResponse;

pub(crate) const PROVIDER_NAME: &str = "bunny";

/// Collection path for DNS zones.
pub(crate) const DNS_ZONE_PATH: &str = "/dnszone";

/// bunny.net DNS zone client
pub struct BunnyProvider {
    pub(crate) client: Client,
    pub(crate) api_key: String,
    pub(crate) api_url: String,
}

impl BunnyProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let api_url = config.api_url.trim_end_matches('/').to_string();
        log::debug!(
            "[{PROVIDER_NAME}] Client for {api_url} (key {})",
            mask_secret(&config.api_key)
        );
        Ok(Self {
            client: create_http_client(PROVIDER_NAME, config)?,
            api_key: config.api_key.clone(),
            api_url,
        })
    }
}
