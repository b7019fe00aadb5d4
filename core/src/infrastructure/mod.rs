pub mod db;
pub mod language;
pub mod recipe;
pub mod search;
pub mod storage;
pub mod vision;

use std::time::Duration;

use reqwest::Client;

use crate::domain::common::entities::app_errors::CoreError;

/// Google API key header. Keys never travel in a request URL.
pub(crate) const API_KEY_HEADER: &str = "x-goog-api-key";

/// Shared outbound client. Every request inherits the timeout; reqwest
/// reports an elapsed timeout as an ordinary transport error.
pub fn build_http_client(timeout: Duration) -> Result<Client, CoreError> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            CoreError::InternalServerError
        })
}
