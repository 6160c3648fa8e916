//! Client for the Spanish Ministry of Industry fuel price REST API
//! ("Precios de Carburantes en las Gasolineras Españolas").
//!
//! Provides the four lookups the selection cascade needs: provinces,
//! municipalities of a province, petroleum products, and stations for a
//! (municipality, product) pair. Plain pass-through reads, no caching.

pub mod error;
pub mod models;

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::config::UpstreamConfig;
use crate::selection::StationQuery;

pub use error::MineturError;
pub use models::{Municipality, PetroleumProduct, Province, Station, StationsResponse};

const PROVINCES_PATH: &str = "ServiciosRESTCarburantes/PreciosCarburantes/Listados/Provincias/";
const MUNICIPALITIES_PATH: &str =
    "ServiciosRESTCarburantes/PreciosCarburantes/Listados/MunicipiosPorProvincia/";
const PRODUCTS_PATH: &str =
    "ServiciosRESTCarburantes/PreciosCarburantes/Listados/ProductosPetroliferos/";
const STATIONS_PATH: &str =
    "ServiciosRESTCarburantes/PreciosCarburantes/EstacionesTerrestres/FiltroMunicipioProducto/";

pub struct MineturClient {
    client: reqwest::Client,
    base_url: String,
}

impl MineturClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, MineturError> {
        let client = reqwest::Client::builder()
            .user_agent("gasolineras-api/0.1")
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// List every Spanish province.
    pub async fn provinces(&self) -> Result<Vec<Province>, MineturError> {
        self.get_json(&format!("{}/{}", self.base_url, PROVINCES_PATH))
            .await
    }

    /// List the municipalities of one province.
    pub async fn municipalities(
        &self,
        province_id: &str,
    ) -> Result<Vec<Municipality>, MineturError> {
        self.get_json(&format!(
            "{}/{}{}",
            self.base_url, MUNICIPALITIES_PATH, province_id
        ))
        .await
    }

    /// List the petroleum products the feed tracks prices for.
    pub async fn products(&self) -> Result<Vec<PetroleumProduct>, MineturError> {
        self.get_json(&format!("{}/{}", self.base_url, PRODUCTS_PATH))
            .await
    }

    /// List the stations of a municipality selling a given product.
    pub async fn stations(&self, query: &StationQuery) -> Result<Vec<Station>, MineturError> {
        let response: StationsResponse = self
            .get_json(&format!(
                "{}/{}{}/{}",
                self.base_url, STATIONS_PATH, query.municipality_id, query.product_id
            ))
            .await?;

        match response.result.as_deref() {
            Some("OK") | None => Ok(response.stations),
            Some(other) => Err(MineturError::Rejected(other.to_string())),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, MineturError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(MineturError::Http(response.status()));
        }

        // Fetch as text first so a parse failure can log a body snippet.
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            // Body may contain accented characters, so truncate by chars.
            let snippet: String = body.chars().take(500).collect();
            warn!(url, error = %e, body = %snippet, "Failed to parse minetur response");
            MineturError::Parse(e.to_string())
        })
    }
}
