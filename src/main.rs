pub mod api;
mod config;
mod providers;
mod schedule;
mod selection;

use std::sync::Arc;

use axum::Router;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api::AppState;
use config::Config;
use providers::minetur::MineturClient;

#[derive(OpenApi)]
#[openapi(
    info(title = "Gasolineras API", version = "0.1.0"),
    paths(
        api::provinces::list_provinces,
        api::municipalities::list_municipalities,
        api::products::list_products,
        api::stations::list_stations,
        api::health::health_check,
    ),
    components(schemas(
        api::ErrorResponse,
        api::provinces::Province,
        api::provinces::ProvinceListResponse,
        api::municipalities::Municipality,
        api::municipalities::MunicipalityListResponse,
        api::products::PetroleumProduct,
        api::products::ProductListResponse,
        api::stations::StationInfo,
        api::stations::StationListResponse,
        api::health::HealthResponse,
    )),
    tags(
        (name = "lookups", description = "Province, municipality and fuel type lists"),
        (name = "stations", description = "Station search with open-now filtering"),
        (name = "health", description = "Service health check")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    // Load config
    let config = Config::load("config.yaml").expect("Failed to load config");
    let timezone = config.parsed_timezone();
    tracing::info!(
        upstream = %config.upstream.base_url,
        timezone = %timezone,
        "Loaded configuration"
    );

    // Build CORS layer based on config
    let cors_layer = if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode explicitly enabled (all origins allowed) - DO NOT USE IN PRODUCTION");
        CorsLayer::permissive()
    } else if !config.cors_origins.is_empty() {
        tracing::info!(origins = ?config.cors_origins, "CORS: Restricting to configured origins");
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
            .allow_headers([axum::http::header::CONTENT_TYPE])
    } else {
        panic!("CORS configuration error: Either set 'cors_origins' with allowed origins, or set 'cors_permissive: true' for development");
    };

    let minetur =
        Arc::new(MineturClient::new(&config.upstream).expect("Failed to build minetur client"));
    let state = AppState {
        minetur,
        timezone,
        upstream_base_url: config.upstream.base_url.clone(),
    };

    // Build the app
    let app = Router::new()
        .nest("/api", api::router(state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {}: {}", config.bind_addr, e));

    tracing::info!("Server running on http://{}", config.bind_addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui", config.bind_addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
