//! CLI command implementations.

pub mod health;
pub mod products;
pub mod seed;

use wonderland_storefront::api::ApiClient;

/// Build an API client from `WONDERLAND_API_URL`.
pub(crate) fn api_client() -> Result<ApiClient, Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let base_url = std::env::var("WONDERLAND_API_URL")
        .map_err(|_| "WONDERLAND_API_URL environment variable not set")?;
    Ok(ApiClient::new(base_url.trim_end_matches('/')))
}
