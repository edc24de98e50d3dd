//! Blog publishing port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// An article describing one reply's object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Post title
    pub title: String,
    /// HTML body
    pub body_html: String,
    /// Tags for the post
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Port for publishing articles
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BlogPort: Send + Sync {
    /// Publish and return the public link
    async fn publish(&self, article: &Article) -> Result<String, ApplicationError>;
}
