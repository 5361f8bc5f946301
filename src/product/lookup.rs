use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

/// Response shape of the product database's by-barcode endpoint.
/// Only the fields we read are modeled.
#[derive(Debug, Deserialize)]
struct ProductResponse {
    #[serde(default)]
    status: Option<u8>, // 0 means "product not found"
    #[serde(default)]
    product: Option<Product>,
}

#[derive(Debug, Deserialize)]
struct Product {
    #[serde(default)]
    ingredients_text: Option<String>,
}

fn product_url(endpoint: &str, barcode: &str) -> String {
    format!("{}/product/{}.json", endpoint.trim_end_matches('/'), barcode)
}

/// Look up a product's ingredients string by barcode.
///
/// Returns `Ok(None)` when the database has no such product, or knows the
/// product but lists no ingredients. Network and decode failures surface as
/// errors; the caller translates both outcomes into "no ingredient list
/// available" -- neither ever reaches the scoring engine.
pub async fn lookup_ingredients(
    client: &reqwest::Client,
    endpoint: &str,
    barcode: &str,
) -> Result<Option<String>> {
    let url = product_url(endpoint, barcode);

    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Product database request failed for barcode {}", barcode))?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }
    let response = response
        .error_for_status()
        .map_err(|e| anyhow!("Product database error: {}", e))?;

    let body: ProductResponse = response
        .json()
        .await
        .context("Product database returned an unexpected response")?;

    if body.status == Some(0) {
        return Ok(None);
    }

    Ok(body
        .product
        .and_then(|p| p.ingredients_text)
        .filter(|text| !text.trim().is_empty()))
}
