//! HTTP places client
//!
//! Autocomplete predictions and place details are cached separately; the
//! autocomplete key is the case-folded input text.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::PlacesConfig;
use crate::error::PlacesError;
use crate::models::{AutocompleteResponse, DetailsResponse, LatLng, Prediction};

/// Trait for place lookup clients
#[async_trait]
pub trait PlacesClient: Send + Sync {
    /// Ranked predictions for free-form input, best first
    async fn autocomplete(&self, input: &str) -> Result<Vec<Prediction>, PlacesError>;

    /// Coordinates of a predicted place
    async fn details(&self, place_id: &str) -> Result<LatLng, PlacesError>;
}

/// Places client over HTTP with in-memory caching
#[derive(Debug)]
pub struct HttpPlacesClient {
    client: Client,
    config: PlacesConfig,
    predictions: Option<Cache<String, Vec<Prediction>>>,
    locations: Option<Cache<String, LatLng>>,
}

impl HttpPlacesClient {
    /// Create a new places client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &PlacesConfig) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("WhatsAboveMe/0.1")
            .build()
            .map_err(|e| PlacesError::ConnectionFailed(e.to_string()))?;

        let (predictions, locations) = if config.caching_enabled() {
            let ttl = Duration::from_secs(config.cache_ttl_minutes * 60);
            (
                Some(
                    Cache::builder()
                        .max_capacity(config.cache_capacity)
                        .time_to_live(ttl)
                        .build(),
                ),
                Some(
                    Cache::builder()
                        .max_capacity(config.cache_capacity)
                        .time_to_live(ttl)
                        .build(),
                ),
            )
        } else {
            (None, None)
        };

        Ok(Self {
            client,
            config: config.clone(),
            predictions,
            locations,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, PlacesError> {
        let url = format!("{}/{endpoint}/json", self.config.base_url);
        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        Self::parse(response).await
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, PlacesError> {
        if !response.status().is_success() {
            return Err(PlacesError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| PlacesError::ParseError(e.to_string()))
    }

    fn map_send_error(&self, e: &reqwest::Error) -> PlacesError {
        if e.is_timeout() {
            PlacesError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            PlacesError::ConnectionFailed(e.to_string())
        }
    }
}

#[async_trait]
impl PlacesClient for HttpPlacesClient {
    #[instrument(skip(self))]
    async fn autocomplete(&self, input: &str) -> Result<Vec<Prediction>, PlacesError> {
        let cache_key = input.trim().to_lowercase();
        if let Some(cache) = &self.predictions {
            if let Some(hit) = cache.get(&cache_key).await {
                debug!("Autocomplete cache hit");
                return Ok(hit);
            }
        }

        let response: AutocompleteResponse = self
            .get_json("autocomplete", &[("input", input.trim())])
            .await?;

        let predictions = match response.status.as_str() {
            "OK" => response.predictions,
            "ZERO_RESULTS" => Vec::new(),
            status => {
                return Err(PlacesError::from_status(
                    status,
                    response.error_message,
                    input,
                ));
            },
        };

        debug!(count = predictions.len(), "Autocomplete returned");
        if let Some(cache) = &self.predictions {
            cache.insert(cache_key, predictions.clone()).await;
        }
        Ok(predictions)
    }

    #[instrument(skip(self))]
    async fn details(&self, place_id: &str) -> Result<LatLng, PlacesError> {
        if let Some(cache) = &self.locations {
            if let Some(hit) = cache.get(place_id).await {
                debug!("Details cache hit");
                return Ok(hit);
            }
        }

        let response: DetailsResponse = self
            .get_json("details", &[("placeid", place_id)])
            .await?;

        if response.status != "OK" {
            return Err(PlacesError::from_status(
                &response.status,
                response.error_message,
                place_id,
            ));
        }

        let location = response
            .result
            .map(|r| r.geometry.location)
            .ok_or_else(|| PlacesError::ParseError("details without result".to_string()))?;

        if let Some(cache) = &self.locations {
            cache.insert(place_id.to_string(), location).await;
        }
        Ok(location)
    }
}
