//! Tagger service port
//!
//! Part-of-speech and named-entity tagging of sanitised message text.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Tag suffixes that mark geo-political and location entities
pub const LOCATION_TAG_SUFFIXES: [&str; 2] = ["GPE", "LOC"];

/// One token with its tag, e.g. ("Rome", "B-GPE")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Surface token
    pub token: String,
    /// Tag assigned by the tagger
    pub tag: String,
}

impl TaggedToken {
    /// Create a tagged token
    pub fn new(token: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            tag: tag.into(),
        }
    }

    /// Whether the tag denotes a location entity
    #[must_use]
    pub fn is_location(&self) -> bool {
        LOCATION_TAG_SUFFIXES
            .iter()
            .any(|suffix| self.tag.ends_with(suffix))
    }
}

/// Port for tagging operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TaggerPort: Send + Sync {
    /// Tag each whitespace-separated token of `text`
    async fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn TaggerPort>();
    }

    #[test]
    fn location_tags() {
        assert!(TaggedToken::new("Rome", "B-GPE").is_location());
        assert!(TaggedToken::new("Alps", "I-LOC").is_location());
        assert!(TaggedToken::new("Alps", "LOC").is_location());
        assert!(!TaggedToken::new("Bob", "B-PERSON").is_location());
        assert!(!TaggedToken::new("visit", "VB").is_location());
    }
}
