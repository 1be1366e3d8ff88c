//! bunny.net error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{BunnyProvider, PROVIDER_NAME};

/// bunny.net reports failures through HTTP status codes; the JSON body only
/// carries a message and, for validation errors, the offending field.
impl ProviderErrorMapper for BunnyProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            Some("401") => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            Some("403") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            Some("404") => ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone_id: context.zone_id.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            // 400: validation error, `Field` names the parameter when present
            Some("400") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: raw.field.unwrap_or_else(|| "general".to_string()),
                detail: raw.message,
            },

            _ => self.unknown_error(raw),
        }
    }
}
