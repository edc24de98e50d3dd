//! Tagger adapter - Implements TaggerPort using integration_tagger

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{TaggedToken, TaggerPort};
use async_trait::async_trait;
use integration_tagger::{HttpTaggerClient, TaggerClient, TaggerConfig, TaggerError};
use tracing::instrument;

/// Adapter for the part-of-speech/entity tagger
pub struct TaggerAdapter {
    client: Arc<dyn TaggerClient>,
}

impl std::fmt::Debug for TaggerAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaggerAdapter")
            .field("client", &"TaggerClient")
            .finish()
    }
}

impl TaggerAdapter {
    /// Create an adapter over the HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &TaggerConfig) -> Result<Self, ApplicationError> {
        config.validate().map_err(ApplicationError::Configuration)?;
        let client = HttpTaggerClient::new(config).map_err(Self::map_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter over any tagger client
    pub fn with_client(client: Arc<dyn TaggerClient>) -> Self {
        Self { client }
    }

    fn map_error(err: TaggerError) -> ApplicationError {
        ApplicationError::ExternalService(format!("tagger: {err}"))
    }
}

#[async_trait]
impl TaggerPort for TaggerAdapter {
    #[instrument(skip(self, text), fields(len = text.len()))]
    async fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, ApplicationError> {
        let tags = self.client.tag(text).await.map_err(Self::map_error)?;
        Ok(tags
            .into_iter()
            .map(|t| TaggedToken::new(t.token, t.tag))
            .collect())
    }
}
