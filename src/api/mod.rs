pub mod error;
pub mod health;
pub mod municipalities;
pub mod products;
pub mod provinces;
pub mod stations;

pub use error::{bad_request, upstream_error, ApiError, ErrorResponse};

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::providers::minetur::MineturClient;

#[derive(Clone)]
pub struct AppState {
    pub minetur: Arc<MineturClient>,
    pub timezone: chrono_tz::Tz,
    pub upstream_base_url: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/provinces", get(provinces::list_provinces))
        .route("/municipalities", get(municipalities::list_municipalities))
        .route("/products", get(products::list_products))
        .route("/stations", get(stations::list_stations))
        .route("/health", get(health::health_check))
        .with_state(state)
}
