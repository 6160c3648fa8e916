use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use super::{upstream_error, ApiError, AppState, ErrorResponse};

#[derive(Debug, Serialize, ToSchema)]
pub struct Province {
    pub id: String,
    pub name: String,
    /// Autonomous community the province belongs to
    pub region: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProvinceListResponse {
    pub provinces: Vec<Province>,
}

/// List all Spanish provinces
#[utoipa::path(
    get,
    path = "/api/provinces",
    responses(
        (status = 200, description = "List of provinces", body = ProvinceListResponse),
        (status = 502, description = "Upstream API unavailable", body = ErrorResponse)
    ),
    tag = "lookups"
)]
pub async fn list_provinces(
    State(state): State<AppState>,
) -> Result<Json<ProvinceListResponse>, ApiError> {
    let provinces = state
        .minetur
        .provinces()
        .await
        .map_err(upstream_error)?
        .into_iter()
        .map(|p| Province {
            id: p.id,
            name: p.name,
            region: p.region,
        })
        .collect();

    Ok(Json(ProvinceListResponse { provinces }))
}
