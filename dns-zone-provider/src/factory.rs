//! Client factory.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::BunnyProvider;
use crate::traits::DnsZoneApi;
use crate::types::ProviderConfig;

/// Creates a [`DnsZoneApi`] client from the given configuration.
///
/// The returned client is wrapped in `Arc<dyn DnsZoneApi>` so the reconciler
/// and its tests can swap in other implementations.
///
/// # Examples
///
/// ```rust,no_run
/// use dns_zone_provider::{create_client, ProviderConfig};
///
/// let client = create_client(&ProviderConfig::new("your-access-key")).unwrap();
/// ```
pub fn create_client(config: &ProviderConfig) -> Result<Arc<dyn DnsZoneApi>> {
    config
        .validate()
        .map_err(|e| crate::error::ProviderError::InvalidParameter {
            provider: "bunny".to_string(),
            param: "config".to_string(),
            detail: e.to_string(),
        })?;
    Ok(Arc::new(BunnyProvider::new(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;

    #[test]
    fn create_client_with_valid_config() {
        let client = create_client(&ProviderConfig::new("key"));
        assert!(client.is_ok());
        assert_eq!(client.map(|c| c.id()).ok(), Some("bunny"));
    }

    #[test]
    fn create_client_rejects_invalid_config() {
        let result = create_client(&ProviderConfig::new(""));
        assert!(matches!(
            result,
            Err(ProviderError::InvalidParameter { ref param, .. }) if param == "config"
        ));
    }
}
