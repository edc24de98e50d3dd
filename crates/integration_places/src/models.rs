//! Places API models

use serde::{Deserialize, Serialize};

/// One autocomplete prediction, best match first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Opaque id for the details call
    pub place_id: String,
    /// Display description, e.g. "Paris, France"
    pub description: String,
    /// Ordered terms making up the description
    #[serde(default)]
    pub terms: Vec<PredictionTerm>,
}

impl Prediction {
    /// Term values in order
    pub fn term_values(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.value.as_str())
    }
}

/// One term of a prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionTerm {
    /// Term text
    pub value: String,
    /// Character offset in the description
    #[serde(default)]
    pub offset: usize,
}

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AutocompleteResponse {
    pub status: String,
    #[serde(default)]
    pub predictions: Vec<Prediction>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailsResponse {
    pub status: String,
    #[serde(default)]
    pub result: Option<DetailsResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailsResult {
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    pub location: LatLng,
}
