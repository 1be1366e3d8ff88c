//! # dns-zone-provider
//!
//! Typed client for the bunny.net DNS zone API.
//!
//! The crate exposes the four zone calls the reconciler needs (add, get, update,
//! delete) behind the [`DnsZoneApi`] trait, plus the configuration needed to
//! reach the API.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_zone_provider::{create_client, DnsZoneAddOptions, DnsZoneUpdateOptions, ProviderConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Build the client from BUNNY_API_KEY / BUNNY_API_URL
//!     let client = create_client(&ProviderConfig::from_env()?)?;
//!
//!     // 2. Create a zone; only the domain is accepted here
//!     let zone = client
//!         .add_zone(&DnsZoneAddOptions { domain: "example.com".to_string() })
//!         .await?;
//!     let id = zone.id.unwrap_or_default();
//!
//!     // 3. Set the remaining attributes
//!     let update = DnsZoneUpdateOptions {
//!         logging_enabled: Some(true),
//!         ..Default::default()
//!     };
//!     client.update_zone(id, &update).await?;
//!
//!     // 4. Remove it again
//!     client.delete_zone(id).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::InvalidCredentials`]: the access key was rejected (HTTP 401)
//! - [`ProviderError::ZoneNotFound`]: the zone does not exist (HTTP 404)
//! - [`ProviderError::RateLimited`]: HTTP 429
//! - [`ProviderError::NetworkError`]: transport failure or HTTP 502-504
//!
//! Requests are never retried by this crate.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory function
pub use factory::create_client;

// Re-export the client trait only (internal traits are not exported)
pub use traits::DnsZoneApi;

// Re-export types
pub use types::{
    ConfigValidationError, DnsZone, DnsZoneAddOptions, DnsZoneUpdateOptions, ProviderConfig,
    DEFAULT_API_URL, ENV_API_KEY, ENV_API_URL,
};

// Re-export the concrete client
pub use providers::BunnyProvider;
