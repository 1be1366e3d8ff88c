//! bunny.net HTTP request methods

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::providers::common::join_url;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{BunnyErrorResponse, BunnyProvider};

impl BunnyProvider {
    /// Send a request and return the response text of a 2xx response.
    ///
    /// Non-2xx responses are mapped through [`ProviderErrorMapper`].
    pub(crate) async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        context: ErrorContext,
    ) -> Result<String> {
        let url = join_url(&self.api_url, path);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("AccessKey", &self.api_key)
            .header("Accept", "application/json");
        if let Some(body) = body {
            let json = HttpUtils::to_json_body(body, self.provider_name())?;
            request = request
                .header("Content-Type", "application/json")
                .body(json);
        }

        let (status, text) =
            HttpUtils::execute_request(request, self.provider_name(), method.as_str(), &url)
                .await?;

        if (200..300).contains(&status) {
            return Ok(text);
        }

        let raw = match serde_json::from_str::<BunnyErrorResponse>(&text) {
            Ok(err) => RawApiError::with_code(
                status.to_string(),
                err.message
                    .or(err.error_key)
                    .unwrap_or_else(|| format!("HTTP {status}")),
            )
            .with_field(err.field),
            Err(_) if text.trim().is_empty() => {
                RawApiError::with_code(status.to_string(), format!("HTTP {status}"))
            }
            Err(_) => RawApiError::with_code(status.to_string(), text),
        };

        let err = self.map_error(raw, context);
        if err.is_expected() {
            log::warn!("API error: {err}");
        } else {
            log::error!("API error: {err}");
        }
        Err(err)
    }

    /// GET and parse the JSON response
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let text = self
            .send::<()>(Method::GET, path, None, context)
            .await?;
        HttpUtils::parse_json(&text, self.provider_name())
    }

    /// POST a JSON body and parse the JSON response
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        let text = self.send(Method::POST, path, Some(body), context).await?;
        HttpUtils::parse_json(&text, self.provider_name())
    }

    /// DELETE
    pub(crate) async fn delete(&self, path: &str, context: ErrorContext) -> Result<()> {
        self.send::<()>(Method::DELETE, path, None, context).await?;
        Ok(())
    }
}
