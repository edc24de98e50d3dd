//! Geocoding service port
//!
//! Defines the interface for turning free-form place text into coordinates.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// A ranked autocomplete suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    /// Opaque identifier for the detail lookup
    pub place_id: String,
    /// Human-readable description, e.g. "Paris, France"
    pub description: String,
    /// Constituent terms in order, e.g. ["Paris", "France"]
    #[serde(default)]
    pub terms: Vec<String>,
}

impl PlaceCandidate {
    /// Create a candidate
    pub fn new(
        place_id: impl Into<String>,
        description: impl Into<String>,
        terms: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            place_id: place_id.into(),
            description: description.into(),
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }
}

/// Coordinates of a resolved place
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    /// Longitude in degrees
    pub longitude: f64,
    /// Latitude in degrees
    pub latitude: f64,
}

/// Port for geocoding operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Ranked candidates for `text`; an empty list means no match
    async fn autocomplete(&self, text: &str) -> Result<Vec<PlaceCandidate>, ApplicationError>;

    /// Coordinates for a candidate's `place_id`
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, ApplicationError>;
}
