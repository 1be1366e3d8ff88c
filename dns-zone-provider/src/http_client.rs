//! Generic HTTP client tools
//!
//! Reusable request processing: sending, logging and reading responses. The
//! provider builds its own `RequestBuilder` (URL, auth header, body) and hands it
//! over here.
//!
//! Requests are sent exactly once. Transient failures are reported as
//! [`ProviderError::NetworkError`], [`ProviderError::Timeout`] or
//! [`ProviderError::RateLimited`] and left to the caller.

use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `provider_name` - provider name (for logging and errors)
    /// * `method_name` - HTTP method (for logging)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for every response that is not 429 or 502–504
    /// * `Err(ProviderError::RateLimited)` for HTTP 429
    /// * `Err(ProviderError::NetworkError)` for transport failures and 502–504
    /// * `Err(ProviderError::Timeout)` when the request timed out
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        // Read Retry-After before the body consumes the response
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ProviderError::RateLimited {
                provider: provider_name.to_string(),
                retry_after,
                raw_message: Some(body),
            });
        }

        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Server error (HTTP {status_code})");
            return Err(ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Serialize a request body, logging it at debug level
    ///
    /// # Returns
    /// * `Ok(String)` - JSON text ready to send
    /// * `Err(ProviderError::SerializationError)` - serialization failed
    pub fn to_json_body<B>(body: &B, provider_name: &str) -> Result<String, ProviderError>
    where
        B: Serialize + ?Sized,
    {
        let json = serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
            provider: provider_name.to_string(),
            detail: e.to_string(),
        })?;
        log::debug!("[{provider_name}] Request Body: {}", truncate_for_log(&json));
        Ok(json)
    }
}
