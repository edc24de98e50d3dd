//! Publishing configuration

use serde::{Deserialize, Serialize};

/// Configuration for image cutouts and the blog
#[derive(Clone, Serialize, Deserialize)]
pub struct PublishingConfig {
    /// Image cutout endpoint
    #[serde(default = "default_cutout_url")]
    pub cutout_url: String,

    /// Cutout scale in arcseconds per pixel
    #[serde(default = "default_cutout_scale")]
    pub cutout_scale: f64,

    /// Cutout width and height in pixels
    #[serde(default = "default_cutout_size_px")]
    pub cutout_size_px: u32,

    /// Blog API base URL
    #[serde(default = "default_blog_api_url")]
    pub blog_api_url: String,

    /// Blog API token
    #[serde(default)]
    pub blog_token: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for PublishingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublishingConfig")
            .field("cutout_url", &self.cutout_url)
            .field("cutout_scale", &self.cutout_scale)
            .field("cutout_size_px", &self.cutout_size_px)
            .field("blog_api_url", &self.blog_api_url)
            .field("blog_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

fn default_cutout_url() -> String {
    "https://skyserver.sdss.org/dr16/SkyServerWS/ImgCutout/getjpeg".to_string()
}

const fn default_cutout_scale() -> f64 {
    0.4
}

const fn default_cutout_size_px() -> u32 {
    512
}

fn default_blog_api_url() -> String {
    "http://localhost:2368/api".to_string()
}

const fn default_timeout_secs() -> u64 {
    20
}

impl Default for PublishingConfig {
    fn default() -> Self {
        Self {
            cutout_url: default_cutout_url(),
            cutout_scale: default_cutout_scale(),
            cutout_size_px: default_cutout_size_px(),
            blog_api_url: default_blog_api_url(),
            blog_token: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PublishingConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            blog_token: "test-token".to_string(),
            cutout_size_px: 64,
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.cutout_url.is_empty() || self.blog_api_url.is_empty() {
            return Err("cutout_url and blog_api_url must not be empty".to_string());
        }

        if self.cutout_scale <= 0.0 || !self.cutout_scale.is_finite() {
            return Err("cutout_scale must be positive".to_string());
        }

        if self.cutout_size_px == 0 || self.cutout_size_px > 2048 {
            return Err("cutout_size_px must be between 1 and 2048".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
