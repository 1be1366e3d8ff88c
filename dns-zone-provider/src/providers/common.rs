//! Provider shared helpers

use std::time::Duration;

use reqwest::Client;

use crate::error::{ProviderError, Result};
use crate::types::ProviderConfig;

// ============ HTTP Client ============

/// Create an HTTP client with the configured timeouts
pub fn create_http_client(provider: &str, config: &ProviderConfig) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

// ============ URLs ============

/// Join a base URL and a path, tolerating a trailing slash on the base
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_handles_slashes() {
        assert_eq!(
            join_url("https://api.bunny.net/", "/dnszone/42"),
            "https://api.bunny.net/dnszone/42"
        );
        assert_eq!(
            join_url("https://api.bunny.net", "dnszone"),
            "https://api.bunny.net/dnszone"
        );
    }

    #[test]
    fn client_builds_from_default_config() {
        let config = ProviderConfig::new("key");
        assert!(create_http_client("test", &config).is_ok());
    }
}
