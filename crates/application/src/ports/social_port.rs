//! Social platform port - Inbound message stream and outbound actions

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// A raw record from the platform's streaming transport
///
/// Keep-alive payloads arrive as records with none of the message fields set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundRecord {
    /// Platform message id
    #[serde(default)]
    pub id: Option<String>,
    /// Message text
    #[serde(default)]
    pub text: Option<String>,
    /// Author handle without the sigil
    #[serde(default)]
    pub author: Option<String>,
    /// Creation time, "Dow Mon DD HH:MM:SS +0000 YYYY"
    #[serde(default)]
    pub created_at: Option<String>,
    /// Author's profile time-zone label
    #[serde(default)]
    pub time_zone: Option<String>,
}

impl InboundRecord {
    /// Create a message record
    pub fn message(
        id: impl Into<String>,
        author: impl Into<String>,
        text: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            text: Some(text.into()),
            author: Some(author.into()),
            created_at: Some(created_at.into()),
            time_zone: None,
        }
    }

    /// A keep-alive record
    #[must_use]
    pub fn keep_alive() -> Self {
        Self::default()
    }

    /// Builder method to set the time-zone label
    #[must_use]
    pub fn with_time_zone(mut self, label: impl Into<String>) -> Self {
        self.time_zone = Some(label.into());
        self
    }

    /// Whether this is a transport keep-alive
    #[must_use]
    pub fn is_keep_alive(&self) -> bool {
        self.text.is_none() && self.author.is_none() && self.created_at.is_none()
    }
}

/// Stream of inbound records; an `Err` item ends the stream
pub type InboundStream = Pin<Box<dyn Stream<Item = Result<InboundRecord, ApplicationError>> + Send>>;

/// A reply ready to post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingReply {
    /// Reply text including mentions and link
    pub text: String,
    /// Message being answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_reply_to: Option<String>,
    /// JPEG to attach
    #[serde(skip)]
    pub image: Option<Vec<u8>>,
}

impl OutgoingReply {
    /// Create a reply to a message
    pub fn new(text: impl Into<String>, in_reply_to: Option<String>) -> Self {
        Self {
            text: text.into(),
            in_reply_to,
            image: None,
        }
    }

    /// Builder method to attach an image
    #[must_use]
    pub fn with_image(mut self, image: Option<Vec<u8>>) -> Self {
        self.image = image;
        self
    }
}

/// Port for social platform operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SocialPort: Send + Sync {
    /// Open the inbound message stream
    async fn open_stream(&self) -> Result<InboundStream, ApplicationError>;

    /// Post a reply, uploading the image first if one is attached
    async fn post_reply(&self, reply: &OutgoingReply) -> Result<(), ApplicationError>;

    /// Follow a user
    async fn follow(&self, username: &str) -> Result<(), ApplicationError>;

    /// Unfollow a user
    async fn unfollow(&self, username: &str) -> Result<(), ApplicationError>;
}
