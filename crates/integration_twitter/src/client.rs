//! HTTP Twitter client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client, RequestBuilder, Response, StatusCode,
    multipart::{Form, Part},
};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use crate::config::TwitterConfig;
use crate::error::TwitterError;
use crate::models::{MediaResponse, StatusResponse};
use crate::stream::{RecordStream, record_stream};

/// Trait for Twitter clients
#[async_trait]
pub trait TwitterClient: Send + Sync {
    /// Open the filtered status stream
    async fn stream(&self) -> Result<RecordStream, TwitterError>;

    /// Post a status, returning its id
    async fn post_status(
        &self,
        text: &str,
        in_reply_to: Option<&str>,
        media_id: Option<&str>,
    ) -> Result<String, TwitterError>;

    /// Upload an image, returning the media id
    async fn upload_media(&self, image: Vec<u8>) -> Result<String, TwitterError>;

    /// Follow a user by screen name
    async fn follow(&self, screen_name: &str) -> Result<(), TwitterError>;

    /// Unfollow a user by screen name
    async fn unfollow(&self, screen_name: &str) -> Result<(), TwitterError>;
}

/// Twitter client over HTTP
#[derive(Debug)]
pub struct HttpTwitterClient {
    client: Client,
    stream_client: Client,
    config: TwitterConfig,
}

impl HttpTwitterClient {
    /// Create a new Twitter client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or an HTTP client
    /// cannot be initialized.
    pub fn new(config: &TwitterConfig) -> Result<Self, TwitterError> {
        config
            .validate()
            .map_err(TwitterError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("WhatsAboveMe/0.1")
            .build()
            .map_err(|e| TwitterError::ConnectionFailed(e.to_string()))?;

        // The stream stays open indefinitely, so only connecting is bounded
        let stream_client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent("WhatsAboveMe/0.1")
            .build()
            .map_err(|e| TwitterError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            stream_client,
            config: config.clone(),
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.config.bearer_token)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, TwitterError> {
        let response = self.authorized(request).send().await.map_err(|e| {
            if e.is_timeout() {
                TwitterError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                }
            } else {
                TwitterError::ConnectionFailed(e.to_string())
            }
        })?;

        Self::check_status(response).await
    }

    async fn check_status(response: Response) -> Result<Response, TwitterError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                let body = response.text().await.unwrap_or_default();
                Err(TwitterError::Unauthorized(format!("HTTP {status}: {body}")))
            },
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after_secs = response
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok());
                Err(TwitterError::RateLimitExceeded { retry_after_secs })
            },
            _ => {
                let body = response.text().await.unwrap_or_default();
                Err(TwitterError::RequestFailed(format!("HTTP {status}: {body}")))
            },
        }
    }

    async fn json<T: DeserializeOwned>(response: Response) -> Result<T, TwitterError> {
        response
            .json()
            .await
            .map_err(|e| TwitterError::ParseError(e.to_string()))
    }

    async fn friendship(&self, action: &str, screen_name: &str) -> Result<(), TwitterError> {
        let url = format!("{}/friendships/{action}.json", self.config.api_base_url);
        self.send(self.client.post(&url).form(&[("screen_name", screen_name)]))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl TwitterClient for HttpTwitterClient {
    #[instrument(skip(self))]
    async fn stream(&self) -> Result<RecordStream, TwitterError> {
        let mut request = self.stream_client.get(&self.config.stream_url);
        if !self.config.track.is_empty() {
            request = request.query(&[("track", self.config.track.join(","))]);
        }

        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| TwitterError::ConnectionFailed(e.to_string()))?;
        let response = Self::check_status(response).await?;

        info!(url = %self.config.stream_url, "Stream connected");
        Ok(record_stream(response.bytes_stream()))
    }

    #[instrument(skip(self, text))]
    async fn post_status(
        &self,
        text: &str,
        in_reply_to: Option<&str>,
        media_id: Option<&str>,
    ) -> Result<String, TwitterError> {
        let url = format!("{}/statuses/update.json", self.config.api_base_url);

        let mut form = vec![("status", text)];
        if let Some(id) = in_reply_to {
            form.push(("in_reply_to_status_id", id));
        }
        if let Some(id) = media_id {
            form.push(("media_ids", id));
        }

        let response = self.send(self.client.post(&url).form(&form)).await?;
        let status: StatusResponse = Self::json(response).await?;
        debug!(id = %status.id_str, "Status posted");
        Ok(status.id_str)
    }

    #[instrument(skip(self, image), fields(bytes = image.len()))]
    async fn upload_media(&self, image: Vec<u8>) -> Result<String, TwitterError> {
        let url = format!("{}/media/upload.json", self.config.upload_base_url);

        let part = Part::bytes(image)
            .file_name("sky.jpg")
            .mime_str("image/jpeg")
            .map_err(|e| TwitterError::ConfigurationError(e.to_string()))?;
        let form = Form::new().part("media", part);

        let response = self.send(self.client.post(&url).multipart(form)).await?;
        let media: MediaResponse = Self::json(response).await?;
        debug!(media_id = %media.media_id_string, "Media uploaded");
        Ok(media.media_id_string)
    }

    #[instrument(skip(self))]
    async fn follow(&self, screen_name: &str) -> Result<(), TwitterError> {
        self.friendship("create", screen_name).await
    }

    #[instrument(skip(self))]
    async fn unfollow(&self, screen_name: &str) -> Result<(), TwitterError> {
        self.friendship("destroy", screen_name).await
    }
}
