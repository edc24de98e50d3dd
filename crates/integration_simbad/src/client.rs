//! SIMBAD script client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::config::SimbadConfig;
use crate::error::SimbadError;
use crate::script::{ConeSearch, ScriptRow, build_script, parse_output};

/// Trait for catalog clients
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Objects inside a cone on the sky
    async fn cone_search(&self, search: &ConeSearch) -> Result<Vec<ScriptRow>, SimbadError>;
}

/// Client for the SIMBAD `sim-script` endpoint
#[derive(Debug)]
pub struct SimbadClient {
    client: Client,
    config: SimbadConfig,
}

impl SimbadClient {
    /// Create a new SIMBAD client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &SimbadConfig) -> Result<Self, SimbadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("WhatsAboveMe/0.1")
            .build()
            .map_err(|e| SimbadError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Configured row limit
    pub const fn max_rows(&self) -> u32 {
        self.config.max_rows
    }
}

#[async_trait]
impl CatalogClient for SimbadClient {
    #[instrument(skip(self, search), fields(ra = search.ra_degrees, dec = search.dec_degrees))]
    async fn cone_search(&self, search: &ConeSearch) -> Result<Vec<ScriptRow>, SimbadError> {
        let script = build_script(search)?;
        let url = format!("{}/sim-script", self.config.base_url);

        debug!(radius = search.radius_degrees, "Running catalog script");

        let response = self
            .client
            .post(&url)
            .form(&[("script", script.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SimbadError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    SimbadError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::SERVICE_UNAVAILABLE || status == StatusCode::BAD_GATEWAY {
            return Err(SimbadError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(SimbadError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SimbadError::ParseError(e.to_string()))?;

        let rows = parse_output(&body, &search.fields)?;
        debug!(rows = rows.len(), "Catalog script returned");
        Ok(rows)
    }
}
