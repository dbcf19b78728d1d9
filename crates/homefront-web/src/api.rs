//! API client utilities for the frontend

use gloo_net::http::Request;
use homefront_core::PublicConfig;

/// Fetch the public site configuration
pub async fn fetch_site_config() -> Result<PublicConfig, String> {
    let response = Request::get("/api/config")
        .send()
        .await
        .map_err(|e| format!("Failed to fetch config: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<PublicConfig>()
        .await
        .map_err(|e| format!("Failed to parse config: {}", e))
}
