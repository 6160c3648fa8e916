use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use super::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Whether the service is running
    pub healthy: bool,
    /// Base URL of the ministry API this service fronts
    pub upstream_base_url: String,
    /// Timezone used to evaluate "open now"
    pub timezone: String,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service health status", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        healthy: true,
        upstream_base_url: state.upstream_base_url.clone(),
        timezone: state.timezone.to_string(),
    })
}
