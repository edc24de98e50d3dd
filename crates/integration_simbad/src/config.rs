//! SIMBAD client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the SIMBAD script interface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimbadConfig {
    /// Base URL of the SIMBAD service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Upper bound on returned rows
    #[serde(default = "default_max_rows")]
    pub max_rows: u32,
}

fn default_base_url() -> String {
    "https://simbad.cds.unistra.fr/simbad".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_max_rows() -> u32 {
    500
}

impl Default for SimbadConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_rows: default_max_rows(),
        }
    }
}

impl SimbadConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            max_rows: 50,
            ..Default::default()
        }
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

        if self.max_rows == 0 {
            return Err("max_rows must be greater than 0".to_string());
        }

        Ok(())
    }
}
