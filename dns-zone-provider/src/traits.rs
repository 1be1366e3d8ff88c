use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{DnsZone, DnsZoneAddOptions, DnsZoneUpdateOptions};

/// Raw API error (internal use)
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Error code (HTTP status or API error key)
    pub code: Option<String>,
    /// Original error message
    pub message: String,
    /// Offending request field, when the API names one
    pub field: Option<String>,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
            field: None,
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: Option<String>) -> Self {
        self.field = field;
        self
    }
}

/// Error context (internal use), supplies the ids the raw error lacks.
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Zone id (for `ZoneNotFound`)
    pub zone_id: Option<String>,
}

impl ErrorContext {
    pub fn zone(id: i64) -> Self {
        Self {
            zone_id: Some(id.to_string()),
        }
    }
}

/// Maps raw API errors onto [`ProviderError`] (internal use)
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error onto the unified error type
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Shortcut: unknown error (fallback)
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Remote DNS zone API.
///
/// The four calls the reconciler needs. Every call is a single request: no
/// retries happen behind this trait.
#[async_trait]
pub trait DnsZoneApi: Send + Sync {
    /// Provider identifier
    fn id(&self) -> &'static str;

    /// Create a zone. Only the fields in [`DnsZoneAddOptions`] are settable here.
    async fn add_zone(&self, opts: &DnsZoneAddOptions) -> Result<DnsZone>;

    /// Fetch a zone by id.
    ///
    /// A missing zone is reported as [`ProviderError::ZoneNotFound`].
    async fn get_zone(&self, id: i64) -> Result<DnsZone>;

    /// Update a zone and return the zone as stored after the update.
    async fn update_zone(&self, id: i64, opts: &DnsZoneUpdateOptions) -> Result<DnsZone>;

    /// Delete a zone.
    ///
    /// A missing zone is reported as [`ProviderError::ZoneNotFound`]; callers
    /// decide whether that counts as success.
    async fn delete_zone(&self, id: i64) -> Result<()>;
}
