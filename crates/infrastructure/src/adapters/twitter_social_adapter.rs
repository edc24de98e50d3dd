//! Social adapter - Implements SocialPort using integration_twitter
//!
//! The filtered stream is mapped record by record into the application's
//! inbound records. A line that fails to decode is passed on as a
//! keep-alive so only a broken transport ends the stream. Images are uploaded
//! first and attached to the status by media id.

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{InboundRecord, InboundStream, OutgoingReply, SocialPort};
use async_trait::async_trait;
use futures::StreamExt;
use integration_twitter::{
    HttpTwitterClient, StreamRecord, TwitterClient, TwitterConfig, TwitterError,
};
use tracing::{debug, info, instrument, warn};

/// Adapter for the streaming social platform
pub struct TwitterSocialAdapter {
    client: Arc<dyn TwitterClient>,
}

impl std::fmt::Debug for TwitterSocialAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterSocialAdapter")
            .field("client", &"TwitterClient")
            .finish()
    }
}

impl TwitterSocialAdapter {
    /// Create an adapter over the HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP clients
    /// fail to initialize.
    pub fn new(config: &TwitterConfig) -> Result<Self, ApplicationError> {
        let client = HttpTwitterClient::new(config).map_err(Self::map_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter over any platform client
    pub fn with_client(client: Arc<dyn TwitterClient>) -> Self {
        Self { client }
    }

    /// Map integration platform error to application error
    fn map_error(err: TwitterError) -> ApplicationError {
        match err {
            TwitterError::RateLimitExceeded { .. } => ApplicationError::RateLimited,
            TwitterError::ConfigurationError(e) => ApplicationError::Configuration(e),
            other => ApplicationError::ExternalService(format!("social: {other}")),
        }
    }

    fn map_record(record: StreamRecord) -> InboundRecord {
        InboundRecord {
            id: record.id,
            text: record.text,
            author: record.author,
            created_at: record.created_at,
            time_zone: record.time_zone,
        }
    }

    fn map_item(item: Result<StreamRecord, TwitterError>) -> Result<InboundRecord, ApplicationError> {
        match item {
            Ok(record) => Ok(Self::map_record(record)),
            Err(TwitterError::ParseError(e)) => {
                warn!(error = %e, "Skipping undecodable stream line");
                Ok(InboundRecord::keep_alive())
            },
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl SocialPort for TwitterSocialAdapter {
    #[instrument(skip(self))]
    async fn open_stream(&self) -> Result<InboundStream, ApplicationError> {
        let records = self.client.stream().await.map_err(Self::map_error)?;
        info!("Stream opened");

        Ok(Box::pin(records.map(Self::map_item)))
    }

    #[instrument(skip(self, reply), fields(in_reply_to = ?reply.in_reply_to, image = reply.image.is_some()))]
    async fn post_reply(&self, reply: &OutgoingReply) -> Result<(), ApplicationError> {
        let media_id = match &reply.image {
            Some(image) => Some(
                self.client
                    .upload_media(image.clone())
                    .await
                    .map_err(Self::map_error)?,
            ),
            None => None,
        };

        let id = self
            .client
            .post_status(
                &reply.text,
                reply.in_reply_to.as_deref(),
                media_id.as_deref(),
            )
            .await
            .map_err(Self::map_error)?;
        debug!(status_id = %id, "Reply posted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn follow(&self, username: &str) -> Result<(), ApplicationError> {
        self.client.follow(username).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn unfollow(&self, username: &str) -> Result<(), ApplicationError> {
        self.client.unfollow(username).await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use futures::stream;
    use integration_twitter::RecordStream;

    use super::*;

    #[derive(Default)]
    struct RecordingTwitter {
        fail_upload: bool,
        calls: Mutex<Vec<String>>,
    }

    impl RecordingTwitter {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl TwitterClient for RecordingTwitter {
        async fn stream(&self) -> Result<RecordStream, TwitterError> {
            let items: Vec<Result<StreamRecord, TwitterError>> = vec![
                Ok(status("1", "bob", "@WhatsAboveMe Paris")),
                Ok(StreamRecord::default()),
                Err(TwitterError::ParseError("stream line: EOF while parsing".into())),
                Ok(status("2", "eve", "@WhatsAboveMe Lima")),
                Err(TwitterError::StreamError("reset".into())),
            ];
            Ok(Box::pin(stream::iter(items)))
        }

        async fn post_status(
            &self,
            text: &str,
            in_reply_to: Option<&str>,
            media_id: Option<&str>,
        ) -> Result<String, TwitterError> {
            self.record(format!("post {text} {in_reply_to:?} {media_id:?}"));
            Ok("43".into())
        }

        async fn upload_media(&self, image: Vec<u8>) -> Result<String, TwitterError> {
            self.record(format!("upload {}", image.len()));
            if self.fail_upload {
                return Err(TwitterError::RequestFailed("HTTP 400".into()));
            }
            Ok("media-7".into())
        }

        async fn follow(&self, screen_name: &str) -> Result<(), TwitterError> {
            self.record(format!("follow {screen_name}"));
            Ok(())
        }

        async fn unfollow(&self, screen_name: &str) -> Result<(), TwitterError> {
            self.record(format!("unfollow {screen_name}"));
            Ok(())
        }
    }

    fn status(id: &str, author: &str, text: &str) -> StreamRecord {
        StreamRecord {
            id: Some(id.into()),
            text: Some(text.into()),
            author: Some(author.into()),
            created_at: Some("Sat Nov 08 21:30:00 +0000 2014".into()),
            time_zone: Some("Paris".into()),
        }
    }

    #[tokio::test]
    async fn stream_maps_records_and_errors() {
        let adapter = TwitterSocialAdapter::with_client(Arc::new(RecordingTwitter::default()));
        let items: Vec<_> = adapter.open_stream().await.unwrap().collect().await;

        assert_eq!(items.len(), 5);
        let first = items[0].as_ref().unwrap();
        assert_eq!(first.author.as_deref(), Some("bob"));
        assert_eq!(first.time_zone.as_deref(), Some("Paris"));
        assert!(items[1].as_ref().unwrap().is_keep_alive());
        assert!(matches!(items[4], Err(ApplicationError::ExternalService(_))));
    }

    #[tokio::test]
    async fn undecodable_line_becomes_keep_alive() {
        let adapter = TwitterSocialAdapter::with_client(Arc::new(RecordingTwitter::default()));
        let items: Vec<_> = adapter.open_stream().await.unwrap().collect().await;

        assert!(items[2].as_ref().unwrap().is_keep_alive());
        assert_eq!(items[3].as_ref().unwrap().id.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn post_reply_uploads_image_first() {
        let client = Arc::new(RecordingTwitter::default());
        let adapter = TwitterSocialAdapter::with_client(client.clone());
        let reply = OutgoingReply::new("@bob M 31", Some("42".into()))
            .with_image(Some(vec![0xFF, 0xD8]));
        adapter.post_reply(&reply).await.unwrap();

        assert_eq!(
            client.calls(),
            vec![
                "upload 2".to_string(),
                r#"post @bob M 31 Some("42") Some("media-7")"#.to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn post_reply_without_image_skips_upload() {
        let client = Arc::new(RecordingTwitter::default());
        let adapter = TwitterSocialAdapter::with_client(client.clone());
        adapter
            .post_reply(&OutgoingReply::new("@bob hi", None))
            .await
            .unwrap();

        assert_eq!(client.calls(), vec!["post @bob hi None None".to_string()]);
    }

    #[tokio::test]
    async fn failed_upload_does_not_post() {
        let client = Arc::new(RecordingTwitter {
            fail_upload: true,
            ..RecordingTwitter::default()
        });
        let adapter = TwitterSocialAdapter::with_client(client.clone());
        let reply = OutgoingReply::new("@bob M 31", None).with_image(Some(vec![1]));

        assert!(adapter.post_reply(&reply).await.is_err());
        assert_eq!(client.calls(), vec!["upload 1".to_string()]);
    }

    #[tokio::test]
    async fn follow_and_unfollow_pass_username() {
        let client = Arc::new(RecordingTwitter::default());
        let adapter = TwitterSocialAdapter::with_client(client.clone());
        adapter.follow("bob").await.unwrap();
        adapter.unfollow("bob").await.unwrap();

        assert_eq!(
            client.calls(),
            vec!["follow bob".to_string(), "unfollow bob".to_string()]
        );
    }

    #[test]
    fn rate_limit_maps_to_rate_limited() {
        let err = TwitterSocialAdapter::map_error(TwitterError::RateLimitExceeded {
            retry_after_secs: Some(900),
        });
        assert!(matches!(err, ApplicationError::RateLimited));
    }

    #[test]
    fn new_rejects_missing_token() {
        let config = TwitterConfig {
            bearer_token: String::new(),
            ..TwitterConfig::for_testing()
        };
        let err = TwitterSocialAdapter::new(&config).unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }
}
