//! Wire models for the ministry "PreciosCarburantes" REST feed.
//!
//! Field names follow the upstream JSON, Spanish spelling and all.
//! `IDPovincia` really is misspelled in the feed; do not "fix" it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Province {
    #[serde(rename = "IDPovincia")]
    pub id: String,
    #[serde(rename = "Provincia")]
    pub name: String,
    #[serde(rename = "CCAA", default)]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Municipality {
    #[serde(rename = "IDMunicipio")]
    pub id: String,
    #[serde(rename = "Municipio")]
    pub name: String,
    #[serde(rename = "IDProvincia", default)]
    pub province_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetroleumProduct {
    #[serde(rename = "IDProducto")]
    pub id: String,
    #[serde(rename = "NombreProducto")]
    pub name: String,
    #[serde(rename = "NombreProductoAbreviatura", default)]
    pub abbreviation: Option<String>,
}

/// Envelope of the station lookup endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationsResponse {
    #[serde(rename = "ListaEESSPrecio", default)]
    pub stations: Vec<Station>,
    #[serde(rename = "ResultadoConsulta", default)]
    pub result: Option<String>,
    /// Feed timestamp and legal note. Parsed for completeness of the
    /// envelope; not currently read.
    #[serde(rename = "Fecha", default)]
    pub date: Option<String>,
    #[serde(rename = "Nota", default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    #[serde(rename = "IDEESS", default)]
    pub id: Option<String>,
    #[serde(rename = "Dirección")]
    pub address: String,
    #[serde(rename = "Localidad")]
    pub locality: String,
    #[serde(rename = "Municipio", default)]
    pub municipality: Option<String>,
    #[serde(rename = "Provincia")]
    pub province: String,
    #[serde(rename = "Rótulo", default)]
    pub brand: Option<String>,
    /// Opening schedule string, e.g. `"L-D: 24H"`.
    #[serde(rename = "Horario")]
    pub schedule: String,
    /// Price for the queried product, decimal-comma formatted ("1,579").
    #[serde(rename = "PrecioProducto")]
    pub price: String,
}

impl Station {
    /// Price as a number. The feed uses a decimal comma.
    pub fn price_eur(&self) -> Option<f64> {
        self.price.trim().replace(',', ".").parse().ok()
    }
}
