//! Tagger service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the tagger service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggerConfig {
    /// Base URL of the tagger service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the tagging endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_endpoint() -> String {
    "/tag".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TaggerConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Full URL of the tagging endpoint
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
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
    fn default_url() {
        assert_eq!(TaggerConfig::default().url(), "http://localhost:8080/tag");
    }

    #[test]
    fn url_joins_slashes() {
        let config = TaggerConfig {
            base_url: "http://tagger:9000/".into(),
            endpoint: "api/ner".into(),
            ..Default::default()
        };
        assert_eq!(config.url(), "http://tagger:9000/api/ner");
    }

    #[test]
    fn validation() {
        assert!(TaggerConfig::default().validate().is_ok());
        let config = TaggerConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
