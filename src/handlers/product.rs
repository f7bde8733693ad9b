use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use std::collections::HashMap;

use crate::error::AppError;
use crate::models::{AppState, ProductFilterQuery, ProductFilterResponse};
use crate::services::filter_catalog;

/// GET /api/product/filter?minPrice=5&maxPrice=20&size=M,L&highlight=red,soft
pub async fn product_filter_get(
    State(state): State<AppState>,
    q: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Json<ProductFilterResponse>, AppError> {
    let Query(q) = q?;
    let query = ProductFilterQuery::from_params(&q)?;
    tracing::info!(?query, "Filtering products");
    let response = filter_catalog(&state.catalog, &query).await?;
    Ok(Json(response))
}
