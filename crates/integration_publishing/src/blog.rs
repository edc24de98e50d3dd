//! Blog publishing

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::config::PublishingConfig;
use crate::error::PublishingError;

/// A post to publish
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    /// Post title
    pub title: String,
    /// HTML body
    pub body: String,
    /// Tags
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PublishResponse {
    url: Option<String>,
    short_url: Option<String>,
}

/// Trait for blog clients
#[async_trait]
pub trait BlogClient: Send + Sync {
    /// Publish a post and return its public link
    async fn publish(&self, post: &BlogPost) -> Result<String, PublishingError>;
}

/// Blog client over HTTP
#[derive(Debug)]
pub struct HttpBlogClient {
    client: Client,
    config: PublishingConfig,
}

impl HttpBlogClient {
    /// Create a new blog client
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
}

#[async_trait]
impl BlogClient for HttpBlogClient {
    #[instrument(skip(self, post), fields(title = %post.title))]
    async fn publish(&self, post: &BlogPost) -> Result<String, PublishingError> {
        let url = format!("{}/posts", self.config.blog_api_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.blog_token)
            .json(post)
            .send()
            .await
            .map_err(|e| PublishingError::from_send(&e, self.config.timeout_secs))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(PublishingError::Unauthorized);
            },
            status if !status.is_success() => {
                return Err(PublishingError::RequestFailed(format!("HTTP {status}")));
            },
            _ => {},
        }

        let body: PublishResponse = response
            .json()
            .await
            .map_err(|e| PublishingError::ParseError(e.to_string()))?;

        let link = body
            .short_url
            .or(body.url)
            .ok_or_else(|| PublishingError::ParseError("response has no link".to_string()))?;
        info!(link = %link, "Article published");
        Ok(link)
    }
}
