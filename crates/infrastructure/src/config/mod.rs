//! Application configuration
//!
//! Sections map one-to-one onto the services they configure:
//! - `bot`: own handle and dry-run switch
//! - `reply`: character budget
//! - `catalog`: search radius and photometric band order
//! - `places`, `simbad`, `tagger`, `twitter`, `publishing`: external services
//! - `telemetry`: log filter and format
//!
//! Values are layered: serde defaults, then an optional `config.toml`, then
//! `WHATSABOVEME_*` environment variables with `__` between nested keys,
//! e.g. `WHATSABOVEME_TWITTER__BEARER_TOKEN`.

mod bot;

use std::path::Path;

use application::{MatcherConfig, ReplyBudget};
use integration_places::PlacesConfig;
use integration_publishing::PublishingConfig;
use integration_simbad::SimbadConfig;
use integration_tagger::TaggerConfig;
use integration_twitter::TwitterConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use bot::BotConfig;

use crate::telemetry::TelemetryConfig;

const ENV_PREFIX: &str = "WHATSABOVEME";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bot identity and run mode
    #[serde(default)]
    pub bot: BotConfig,

    /// Reply character budget
    #[serde(default)]
    pub reply: ReplyBudget,

    /// Nearest-object search settings
    #[serde(default)]
    pub catalog: MatcherConfig,

    /// Geocoding service
    #[serde(default)]
    pub places: PlacesConfig,

    /// Astronomical catalog service
    #[serde(default)]
    pub simbad: SimbadConfig,

    /// Tagger service
    #[serde(default)]
    pub tagger: TaggerConfig,

    /// Streaming social platform
    #[serde(default)]
    pub twitter: TwitterConfig,

    /// Image cutouts and blog
    #[serde(default)]
    pub publishing: PublishingConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` in the working directory (if
    /// present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(
            config::File::with_name("config").required(false),
            Self::environment(),
        )
    }

    /// Load configuration from an explicit file and the environment
    ///
    /// The file must exist. Its format follows the extension.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true), Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("twitter.track")
            .with_list_parse_key("catalog.magnitude_bands")
    }

    fn build(
        file: config::File<config::FileSourceFile, config::FileFormat>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()?;
        let app: Self = config.try_deserialize()?;
        debug!(handle = %app.bot.handle, dry_run = app.bot.dry_run, "Configuration loaded");
        Ok(app)
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            bot: BotConfig::default(),
            reply: ReplyBudget::default(),
            catalog: MatcherConfig::default(),
            places: PlacesConfig::for_testing(),
            simbad: SimbadConfig::for_testing(),
            tagger: TaggerConfig::for_testing(),
            twitter: TwitterConfig::for_testing(),
            publishing: PublishingConfig::for_testing(),
            telemetry: TelemetryConfig::default(),
        }
    }

    /// Validate every section
    ///
    /// Platform credentials are only required outside dry-run mode.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, prefixed with its section name.
    pub fn validate(&self) -> Result<(), String> {
        let section = |name: &str, result: Result<(), String>| {
            result.map_err(|e| format!("[{name}] {e}"))
        };

        section("bot", self.bot.validate())?;
        section("reply", validate_budget(&self.reply))?;
        section("catalog", validate_catalog(&self.catalog))?;
        section("places", self.places.validate())?;
        section("simbad", self.simbad.validate())?;
        section("tagger", self.tagger.validate())?;
        section("publishing", self.publishing.validate())?;
        section("telemetry", self.telemetry.validate())?;
        if !self.bot.dry_run {
            section("twitter", self.twitter.validate())?;
        }

        Ok(())
    }
}

fn validate_budget(budget: &ReplyBudget) -> Result<(), String> {
    if budget.available() == 0 {
        return Err(format!(
            "reservations ({}) leave no room for text within {} characters",
            budget.reserved(),
            budget.characters_maximum
        ));
    }
    Ok(())
}

fn validate_catalog(catalog: &MatcherConfig) -> Result<(), String> {
    let radius = catalog.search_radius_degrees;
    if !radius.is_finite() || radius <= 0.0 || radius > 10.0 {
        return Err(format!(
            "search_radius_degrees must be in (0, 10], got {radius}"
        ));
    }

    if catalog.magnitude_bands.is_empty() {
        return Err("magnitude_bands must not be empty".to_string());
    }

    if let Some(band) = catalog
        .magnitude_bands
        .iter()
        .find(|b| b.chars().count() != 1 || !b.chars().all(|c| c.is_ascii_alphabetic()))
    {
        return Err(format!("magnitude band must be a single letter: {band}"));
    }

    Ok(())
}
