//! Twitter client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Twitter endpoints
#[derive(Clone, Serialize, Deserialize)]
pub struct TwitterConfig {
    /// Base URL of the REST API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Base URL of the media upload API
    #[serde(default = "default_upload_base_url")]
    pub upload_base_url: String,

    /// URL of the streaming endpoint
    #[serde(default = "default_stream_url")]
    pub stream_url: String,

    /// Terms the stream is filtered on
    #[serde(default)]
    pub track: Vec<String>,

    /// Bearer token for all requests
    #[serde(default)]
    pub bearer_token: String,

    /// Timeout for REST calls in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout for the stream in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl std::fmt::Debug for TwitterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterConfig")
            .field("api_base_url", &self.api_base_url)
            .field("upload_base_url", &self.upload_base_url)
            .field("stream_url", &self.stream_url)
            .field("track", &self.track)
            .field("bearer_token", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

fn default_api_base_url() -> String {
    "https://api.twitter.com/1.1".to_string()
}

fn default_upload_base_url() -> String {
    "https://upload.twitter.com/1.1".to_string()
}

fn default_stream_url() -> String {
    "https://stream.twitter.com/1.1/statuses/filter.json".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            upload_base_url: default_upload_base_url(),
            stream_url: default_stream_url(),
            track: Vec::new(),
            bearer_token: String::new(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl TwitterConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            bearer_token: "test-token".to_string(),
            track: vec!["@WhatsAboveMe".to_string()],
            timeout_secs: 5,
            connect_timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_base_url.is_empty() || self.stream_url.is_empty() {
            return Err("api_base_url and stream_url must not be empty".to_string());
        }

        if self.bearer_token.is_empty() {
            return Err("bearer_token must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TwitterConfig::default();
        assert_eq!(config.api_base_url, "https://api.twitter.com/1.1");
        assert!(config.track.is_empty());
        assert!(config.validate().is_err());
    }

    #[test]
    fn testing_config_is_valid() {
        assert!(TwitterConfig::for_testing().validate().is_ok());
    }

    #[test]
    fn debug_redacts_token() {
        let config = TwitterConfig {
            bearer_token: "super-secret".into(),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
