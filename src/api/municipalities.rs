use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::{bad_request, upstream_error, ApiError, AppState, ErrorResponse};

#[derive(Debug, Deserialize, IntoParams)]
pub struct MunicipalityListParams {
    /// Province whose municipalities to list. The cascade starts here:
    /// municipalities cannot be listed before a province is chosen.
    pub province_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Municipality {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MunicipalityListResponse {
    pub province_id: String,
    pub municipalities: Vec<Municipality>,
}

/// List the municipalities of a province
#[utoipa::path(
    get,
    path = "/api/municipalities",
    params(MunicipalityListParams),
    responses(
        (status = 200, description = "Municipalities of the province", body = MunicipalityListResponse),
        (status = 400, description = "No province selected", body = ErrorResponse),
        (status = 502, description = "Upstream API unavailable", body = ErrorResponse)
    ),
    tag = "lookups"
)]
pub async fn list_municipalities(
    State(state): State<AppState>,
    Query(params): Query<MunicipalityListParams>,
) -> Result<Json<MunicipalityListResponse>, ApiError> {
    let province_id = params
        .province_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| bad_request("Select a province to list its municipalities."))?;

    let municipalities = state
        .minetur
        .municipalities(&province_id)
        .await
        .map_err(upstream_error)?
        .into_iter()
        .map(|m| Municipality {
            id: m.id,
            name: m.name,
        })
        .collect();

    Ok(Json(MunicipalityListResponse {
        province_id,
        municipalities,
    }))
}
