//! Bot identity and run mode

use serde::{Deserialize, Serialize};

/// Bot identity and run mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    /// The bot's own handle, with the mention sigil
    #[serde(default = "default_handle")]
    pub handle: String,

    /// Compose replies without following, publishing or posting
    #[serde(default)]
    pub dry_run: bool,
}

fn default_handle() -> String {
    "@WhatsAboveMe".to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            handle: default_handle(),
            dry_run: false,
        }
    }
}

impl BotConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is not a single `@name` token.
    pub fn validate(&self) -> Result<(), String> {
        let Some(name) = self.handle.strip_prefix('@') else {
            return Err(format!("bot handle must start with '@': {}", self.handle));
        };

        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(format!("bot handle must be a single token: {}", self.handle));
        }

        Ok(())
    }
}
