use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::{IntoParams, ToSchema};

use crate::providers::minetur;
use crate::schedule::{self, Instant};
use crate::selection::{Selection, StationQuery};

use super::{bad_request, upstream_error, ApiError, AppState, ErrorResponse};

const INCOMPLETE_SELECTION_MESSAGE: &str =
    "Please select a province, municipality, and fuel type to see the results.";

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct StationListParams {
    pub province_id: Option<String>,
    pub municipality_id: Option<String>,
    pub product_id: Option<String>,
    /// Only return stations open at the evaluation instant
    #[serde(default)]
    pub open_now: bool,
    /// Optional reference time (ISO 8601/RFC 3339) for time simulation.
    /// When omitted, "open now" is evaluated at the current time in the
    /// configured timezone.
    pub at: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StationInfo {
    pub id: Option<String>,
    pub address: String,
    pub locality: String,
    pub province: String,
    /// Station operator sign, e.g. "REPSOL"
    pub brand: Option<String>,
    /// Raw opening schedule string, e.g. "L-V: 08:00-20:00"
    pub schedule: String,
    /// Price of the queried product in EUR per liter, when the feed
    /// value was numeric
    pub price: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StationListResponse {
    pub stations: Vec<StationInfo>,
    /// Whether the open-now filter was applied
    pub open_now: bool,
    /// Stations dropped from an open-now listing because their schedule
    /// string could not be parsed (fail-closed)
    pub unparseable_schedules: usize,
}

/// Build the selection cascade from query parameters, applying each level
/// in order so an out-of-order query (e.g. product without municipality)
/// comes out incomplete.
fn selection_from_params(params: &StationListParams) -> Selection {
    let mut selection = Selection::new();
    if let Some(province) = params.province_id.as_deref().filter(|s| !s.is_empty()) {
        selection = selection.select_province(province);
    }
    if let Some(municipality) = params.municipality_id.as_deref().filter(|s| !s.is_empty()) {
        selection = selection.select_municipality(municipality);
    }
    if let Some(product) = params.product_id.as_deref().filter(|s| !s.is_empty()) {
        selection = selection.select_product(product);
    }
    selection
}

/// Resolve the evaluation instant: the `at` simulation parameter when
/// given, otherwise now, both in the service timezone.
fn evaluation_instant(at: &Option<String>, timezone: chrono_tz::Tz) -> Result<Instant, ApiError> {
    let utc = match at {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map_err(|e| bad_request(format!("Invalid 'at' timestamp: {e}")))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };
    Ok(Instant::from_datetime(&utc.with_timezone(&timezone)))
}

/// Keep the stations open at the given instant. A schedule that fails to
/// parse closes its station and is counted for diagnostics.
fn filter_open(stations: Vec<minetur::Station>, at: Instant) -> (Vec<minetur::Station>, usize) {
    let mut unparseable = 0;
    let stations = stations
        .into_iter()
        .filter(|station| match schedule::is_open(&station.schedule, at) {
            Ok(open) => open,
            Err(e) => {
                warn!(
                    station = station.id.as_deref().unwrap_or("?"),
                    error = %e,
                    "Dropping station with unparseable schedule from open-now listing"
                );
                unparseable += 1;
                false
            }
        })
        .collect();
    (stations, unparseable)
}

/// List the stations of a municipality selling a product
#[utoipa::path(
    get,
    path = "/api/stations",
    params(StationListParams),
    responses(
        (status = 200, description = "Matching stations", body = StationListResponse),
        (status = 400, description = "Incomplete selection", body = ErrorResponse),
        (status = 502, description = "Upstream API unavailable", body = ErrorResponse)
    ),
    tag = "stations"
)]
pub async fn list_stations(
    State(state): State<AppState>,
    Query(params): Query<StationListParams>,
) -> Result<Json<StationListResponse>, ApiError> {
    let query: StationQuery = selection_from_params(&params)
        .complete()
        .ok_or_else(|| bad_request(INCOMPLETE_SELECTION_MESSAGE))?;

    let stations = state
        .minetur
        .stations(&query)
        .await
        .map_err(upstream_error)?;

    let (stations, unparseable_schedules) = if params.open_now {
        let at = evaluation_instant(&params.at, state.timezone)?;
        filter_open(stations, at)
    } else {
        (stations, 0)
    };

    let stations = stations
        .into_iter()
        .map(|s| StationInfo {
            id: s.id.clone(),
            price: s.price_eur(),
            address: s.address,
            locality: s.locality,
            province: s.province,
            brand: s.brand,
            schedule: s.schedule,
        })
        .collect();

    Ok(Json(StationListResponse {
        stations,
        open_now: params.open_now,
        unparseable_schedules,
    }))
}
