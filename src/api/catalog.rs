use std::time::Duration;

use crate::error::AppError;
use crate::models::{Product, ProductResponse};
use super::client::get_text;

/// Fetches the product catalog from the configured upstream URL.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    catalog_url: String,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Build a fetcher for `catalog_url`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigurationMissing` when the URL is blank, so a
    /// misconfigured process fails before it serves traffic.
    pub fn new(catalog_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let catalog_url = catalog_url.trim();
        if catalog_url.is_empty() {
            return Err(AppError::ConfigurationMissing(
                "catalog URL must not be empty".to_string(),
            ));
        }
        let client = reqwest::Client::builder()
            .user_agent(format!("catalog-filter/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::ConfigurationMissing(format!("HTTP client: {}", e)))?;
        Ok(Self {
            catalog_url: catalog_url.to_string(),
            client,
        })
    }

    pub fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    /// Fetch and parse the catalog once.
    ///
    /// `Ok(None)` means the envelope had no `products` field; `Ok(Some(vec![]))`
    /// means it was explicitly empty. Callers treat both as "no products".
    ///
    /// # Errors
    ///
    /// `UpstreamUnavailable` for network, timeout or status failures and
    /// `MalformedUpstreamPayload` when the body is not JSON of the expected shape.
    pub async fn fetch(&self) -> Result<Option<Vec<Product>>, AppError> {
        tracing::info!(url = %self.catalog_url, "Fetching product catalog");
        let body = get_text(&self.client, &self.catalog_url).await?;
        let products = parse_catalog(&body)?;
        match &products {
            None => tracing::warn!(url = %self.catalog_url, "Catalog response has no product list"),
            Some(list) if list.is_empty() => {
                tracing::warn!(url = %self.catalog_url, "Catalog response contains no products")
            }
            Some(list) => tracing::info!(count = list.len(), "Fetched product catalog"),
        }
        Ok(products)
    }
}

/// Parse a catalog envelope body. A `null` body is an absent envelope.
pub fn parse_catalog(body: &str) -> Result<Option<Vec<Product>>, AppError> {
    let envelope: Option<ProductResponse> = serde_json::from_str(body)?;
    Ok(envelope.and_then(|e| e.products))
}
