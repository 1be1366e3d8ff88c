//! bunny.net API type definitions

use serde::Deserialize;

/// Error body returned with 4xx responses
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BunnyErrorResponse {
    #[serde(default)]
    pub error_key: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
