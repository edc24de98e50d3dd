//! Place lookup integration for WhatsAboveMe
//!
//! Resolves free-form place text through a Places-style web service in two
//! steps: an autocomplete call ranks candidate places, and a details call
//! returns the coordinates of the chosen candidate.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_places::{HttpPlacesClient, PlacesClient, PlacesConfig};
//!
//! let client = HttpPlacesClient::new(&PlacesConfig::default())?;
//! let predictions = client.autocomplete("Paris").await?;
//! let location = client.details(&predictions[0].place_id).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{HttpPlacesClient, PlacesClient};
pub use config::PlacesConfig;
pub use error::PlacesError;
pub use models::{LatLng, Prediction, PredictionTerm};
