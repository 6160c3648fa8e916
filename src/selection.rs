//! Pure selection-cascade state.
//!
//! The station lookup depends on three choices made in order: province,
//! then municipality, then petroleum product. Choosing at one level
//! invalidates everything downstream of it. This module keeps that rule
//! in one place as transitions over a plain value, decoupled from both
//! fetching and rendering.

/// The user's current position in the province → municipality → product
/// cascade. Invariant: a level is only set when every level above it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    province: Option<String>,
    municipality: Option<String>,
    product: Option<String>,
}

/// A fully specified station lookup. Only the municipality and product
/// feed the upstream query; the province is needed just to narrow the
/// municipality list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationQuery {
    pub municipality_id: String,
    pub product_id: String,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick a province, discarding any downstream choices.
    pub fn select_province(self, province_id: impl Into<String>) -> Self {
        Self {
            province: Some(province_id.into()),
            municipality: None,
            product: None,
        }
    }

    /// Pick a municipality. Ignored unless a province is selected.
    pub fn select_municipality(self, municipality_id: impl Into<String>) -> Self {
        if self.province.is_none() {
            return self;
        }
        Self {
            municipality: Some(municipality_id.into()),
            product: None,
            ..self
        }
    }

    /// Pick a petroleum product. Ignored unless a municipality is selected.
    pub fn select_product(self, product_id: impl Into<String>) -> Self {
        if self.municipality.is_none() {
            return self;
        }
        Self {
            product: Some(product_id.into()),
            ..self
        }
    }

    /// Reset to no selection at all.
    pub fn clear(self) -> Self {
        Self::default()
    }

    pub fn province(&self) -> Option<&str> {
        self.province.as_deref()
    }

    pub fn municipality(&self) -> Option<&str> {
        self.municipality.as_deref()
    }

    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }

    /// The station query this selection describes, if all three levels
    /// are chosen.
    pub fn complete(&self) -> Option<StationQuery> {
        match (&self.province, &self.municipality, &self.product) {
            (Some(_), Some(municipality), Some(product)) => Some(StationQuery {
                municipality_id: municipality.clone(),
                product_id: product.clone(),
            }),
            _ => None,
        }
    }
}
