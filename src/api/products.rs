use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use super::{upstream_error, ApiError, AppState, ErrorResponse};

#[derive(Debug, Serialize, ToSchema)]
pub struct PetroleumProduct {
    pub id: String,
    pub name: String,
    /// Short code like "G95E5"
    pub abbreviation: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListResponse {
    pub products: Vec<PetroleumProduct>,
}

/// List the petroleum products with tracked prices
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "List of fuel types", body = ProductListResponse),
        (status = 502, description = "Upstream API unavailable", body = ErrorResponse)
    ),
    tag = "lookups"
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let products = state
        .minetur
        .products()
        .await
        .map_err(upstream_error)?
        .into_iter()
        .map(|p| PetroleumProduct {
            id: p.id,
            name: p.name,
            abbreviation: p.abbreviation,
        })
        .collect();

    Ok(Json(ProductListResponse { products }))
}
