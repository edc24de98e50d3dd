//! Geocoding adapter - Implements GeocodingPort using integration_places

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{GeocodingPort, PlaceCandidate, PlaceDetails};
use async_trait::async_trait;
use integration_places::{HttpPlacesClient, PlacesClient, PlacesConfig, PlacesError, Prediction};
use tracing::{debug, instrument};

/// Adapter for the place autocomplete service
pub struct PlacesGeocodingAdapter {
    client: Arc<dyn PlacesClient>,
}

impl std::fmt::Debug for PlacesGeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesGeocodingAdapter")
            .field("client", &"PlacesClient")
            .finish()
    }
}

impl PlacesGeocodingAdapter {
    /// Create an adapter over the HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &PlacesConfig) -> Result<Self, ApplicationError> {
        config.validate().map_err(ApplicationError::Configuration)?;
        let client = HttpPlacesClient::new(config).map_err(Self::map_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter over any places client
    pub fn with_client(client: Arc<dyn PlacesClient>) -> Self {
        Self { client }
    }

    /// Map integration places error to application error
    fn map_error(err: PlacesError) -> ApplicationError {
        match err {
            PlacesError::QuotaExceeded => ApplicationError::RateLimited,
            PlacesError::NotFound(id) => ApplicationError::LocationNotFound(id),
            PlacesError::RequestDenied(e) => ApplicationError::Configuration(e),
            other => ApplicationError::ExternalService(format!("geocoder: {other}")),
        }
    }

    fn map_prediction(prediction: Prediction) -> PlaceCandidate {
        let terms = prediction.term_values().map(str::to_string).collect();
        PlaceCandidate {
            place_id: prediction.place_id,
            description: prediction.description,
            terms,
        }
    }
}

#[async_trait]
impl GeocodingPort for PlacesGeocodingAdapter {
    #[instrument(skip(self))]
    async fn autocomplete(&self, text: &str) -> Result<Vec<PlaceCandidate>, ApplicationError> {
        let predictions = self
            .client
            .autocomplete(text)
            .await
            .map_err(Self::map_error)?;
        debug!(count = predictions.len(), "Autocomplete predictions");

        Ok(predictions.into_iter().map(Self::map_prediction).collect())
    }

    #[instrument(skip(self))]
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, ApplicationError> {
        let position = self
            .client
            .details(place_id)
            .await
            .map_err(Self::map_error)?;

        Ok(PlaceDetails {
            longitude: position.lng,
            latitude: position.lat,
        })
    }
}
