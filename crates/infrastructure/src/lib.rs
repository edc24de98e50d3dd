//! Infrastructure layer - Adapters, configuration and logging
//!
//! Implements the application ports over the integration crates and builds
//! the sky-reply service from layered configuration.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod wiring;

pub use adapters::{
    BlogAdapter, CutoutImageAdapter, PlacesGeocodingAdapter, SimbadCatalogAdapter, TaggerAdapter,
    TwitterSocialAdapter,
};
pub use config::{AppConfig, BotConfig};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
pub use wiring::{Services, build_classifier, build_services};
