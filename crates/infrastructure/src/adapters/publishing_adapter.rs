//! Publishing adapters - Implement ImagePort and BlogPort using
//! integration_publishing

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{Article, BlogPort, ImagePort};
use async_trait::async_trait;
use domain::CelestialObject;
use integration_publishing::{
    BlogClient, BlogPost, CutoutClient, CutoutRequest, HttpBlogClient, HttpCutoutClient,
    PublishingConfig, PublishingError,
};
use tracing::{debug, instrument};

/// Map integration publishing error to application error
fn map_error(err: PublishingError) -> ApplicationError {
    match err {
        PublishingError::Unauthorized => {
            ApplicationError::Configuration("blog credentials rejected".to_string())
        },
        other => ApplicationError::ExternalService(format!("publishing: {other}")),
    }
}

/// Adapter for sky image cutouts
pub struct CutoutImageAdapter {
    client: Arc<dyn CutoutClient>,
}

impl std::fmt::Debug for CutoutImageAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CutoutImageAdapter")
            .field("client", &"CutoutClient")
            .finish()
    }
}

impl CutoutImageAdapter {
    /// Create an adapter over the HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &PublishingConfig) -> Result<Self, ApplicationError> {
        config.validate().map_err(ApplicationError::Configuration)?;
        let client = HttpCutoutClient::new(config).map_err(map_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter over any cutout client
    pub fn with_client(client: Arc<dyn CutoutClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImagePort for CutoutImageAdapter {
    #[instrument(skip(self, object), fields(object = %object.name))]
    async fn fetch_image(&self, object: &CelestialObject) -> Result<Vec<u8>, ApplicationError> {
        let request = CutoutRequest {
            ra_degrees: object.coordinate.right_ascension(),
            dec_degrees: object.coordinate.declination(),
        };
        self.client.fetch(request).await.map_err(map_error)
    }
}

/// Adapter for the blog publishing API
pub struct BlogAdapter {
    client: Arc<dyn BlogClient>,
}

impl std::fmt::Debug for BlogAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlogAdapter")
            .field("client", &"BlogClient")
            .finish()
    }
}

impl BlogAdapter {
    /// Create an adapter over the HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &PublishingConfig) -> Result<Self, ApplicationError> {
        config.validate().map_err(ApplicationError::Configuration)?;
        let client = HttpBlogClient::new(config).map_err(map_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter over any blog client
    pub fn with_client(client: Arc<dyn BlogClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BlogPort for BlogAdapter {
    #[instrument(skip(self, article), fields(title = %article.title))]
    async fn publish(&self, article: &Article) -> Result<String, ApplicationError> {
        let post = BlogPost {
            title: article.title.clone(),
            body: article.body_html.clone(),
            tags: article.tags.clone(),
        };
        let link = self.client.publish(&post).await.map_err(map_error)?;
        debug!(link = %link, "Article link");
        Ok(link)
    }
}
