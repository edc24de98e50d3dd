//! Sky image cutouts

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::PublishingConfig;
use crate::error::PublishingError;

/// Position and framing of a cutout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutoutRequest {
    /// Centre right ascension in degrees
    pub ra_degrees: f64,
    /// Centre declination in degrees
    pub dec_degrees: f64,
}

/// Trait for cutout clients
#[async_trait]
pub trait CutoutClient: Send + Sync {
    /// JPEG bytes centred on the requested position
    async fn fetch(&self, request: CutoutRequest) -> Result<Vec<u8>, PublishingError>;
}

/// Cutout client over HTTP
#[derive(Debug)]
pub struct HttpCutoutClient {
    client: Client,
    config: PublishingConfig,
}

impl HttpCutoutClient {
    /// Create a new cutout client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &PublishingConfig) -> Result<Self, PublishingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("WhatsAboveMe/0.1")
            .build()
            .map_err(|e| PublishingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn query(&self, request: CutoutRequest) -> Vec<(&'static str, String)> {
        vec![
            ("ra", format!("{:.6}", request.ra_degrees)),
            ("dec", format!("{:.6}", request.dec_degrees)),
            ("scale", self.config.cutout_scale.to_string()),
            ("width", self.config.cutout_size_px.to_string()),
            ("height", self.config.cutout_size_px.to_string()),
        ]
    }
}

#[async_trait]
impl CutoutClient for HttpCutoutClient {
    #[instrument(skip(self))]
    async fn fetch(&self, request: CutoutRequest) -> Result<Vec<u8>, PublishingError> {
        let response = self
            .client
            .get(&self.config.cutout_url)
            .query(&self.query(request))
            .send()
            .await
            .map_err(|e| PublishingError::from_send(&e, self.config.timeout_secs))?;

        if !response.status().is_success() {
            return Err(PublishingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !content_type.starts_with("image/") {
            return Err(PublishingError::NotAnImage(content_type));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| PublishingError::ConnectionFailed(e.to_string()))?;
        debug!(bytes = bytes.len(), "Cutout fetched");
        Ok(bytes.to_vec())
    }
}
