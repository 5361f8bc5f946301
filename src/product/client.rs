use anyhow::{Context, Result};

/// Public endpoint used when the config names no product database.
pub const DEFAULT_ENDPOINT: &str = "https://world.openfoodfacts.org/api/v2";

/// Create an HTTP client for product database lookups.
pub fn create_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("snackscore/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to create product database client")
}
