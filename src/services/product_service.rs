use crate::api::CatalogClient;
use crate::error::AppError;
use crate::models::{Product, ProductFilterQuery, ProductFilterResponse};

use super::filter_service::filter_products;
use super::highlight_service::highlight;
use super::metadata_service::summarize;

/// Fetch the catalog once and build the filter response from it.
/// A failed fetch fails the whole request.
pub async fn filter_catalog(
    catalog: &CatalogClient,
    query: &ProductFilterQuery,
) -> Result<ProductFilterResponse, AppError> {
    let products = catalog.fetch().await?;
    Ok(build_filter_response(products.as_deref().unwrap_or_default(), query))
}

/// Filter and highlight `catalog`; metadata always describes the full,
/// unfiltered catalog so clients can discover values outside their current view.
pub fn build_filter_response(catalog: &[Product], query: &ProductFilterQuery) -> ProductFilterResponse {
    let mut products = filter_products(catalog, query.min_price, query.max_price, &query.sizes);

    for product in &mut products {
        product.description = Some(highlight(product.description.as_deref(), &query.highlight));
    }

    tracing::debug!(
        catalog = catalog.len(),
        matched = products.len(),
        "Filtered product catalog"
    );

    ProductFilterResponse {
        products,
        filter: summarize(catalog),
    }
}
