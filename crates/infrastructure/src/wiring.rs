//! Service construction from configuration

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{
    BlogPort, CatalogPort, GeocodingPort, ImagePort, InboundStream, OutgoingReply, SocialPort,
    TaggerPort,
};
use application::{
    IntentClassifier, LocationResolver, ObjectMatcher, SkyReplyService, SkyReplySettings,
};
use async_trait::async_trait;
use tracing::info;

use crate::adapters::{
    BlogAdapter, CutoutImageAdapter, PlacesGeocodingAdapter, SimbadCatalogAdapter, TaggerAdapter,
    TwitterSocialAdapter,
};
use crate::config::AppConfig;

/// The dispatcher together with the transport it reads from
pub struct Services {
    /// Per-message dispatcher
    pub sky_reply: SkyReplyService,
    /// Transport that supplies the inbound stream
    pub social: Arc<dyn SocialPort>,
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("sky_reply", &self.sky_reply)
            .finish_non_exhaustive()
    }
}

/// Stand-in transport for dry runs, where no platform credentials exist
#[derive(Debug)]
struct OfflineSocial;

impl OfflineSocial {
    fn unavailable() -> ApplicationError {
        ApplicationError::Configuration("social transport is not configured in dry-run mode".into())
    }
}

#[async_trait]
impl SocialPort for OfflineSocial {
    async fn open_stream(&self) -> Result<InboundStream, ApplicationError> {
        Err(Self::unavailable())
    }

    async fn post_reply(&self, _reply: &OutgoingReply) -> Result<(), ApplicationError> {
        Err(Self::unavailable())
    }

    async fn follow(&self, _username: &str) -> Result<(), ApplicationError> {
        Err(Self::unavailable())
    }

    async fn unfollow(&self, _username: &str) -> Result<(), ApplicationError> {
        Err(Self::unavailable())
    }
}

/// Build a classifier that only needs the tagger
///
/// # Errors
///
/// Returns an error if the tagger configuration is invalid.
pub fn build_classifier(config: &AppConfig) -> Result<IntentClassifier, ApplicationError> {
    let tagger: Arc<dyn TaggerPort> = Arc::new(TaggerAdapter::new(&config.tagger)?);
    Ok(IntentClassifier::new(tagger, config.bot.handle.clone()))
}

/// Build the dispatcher and its transport
///
/// In dry-run mode without platform credentials the transport is offline:
/// single messages can still be handled but no stream can be opened.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or an adapter fails to
/// initialize.
pub fn build_services(config: &AppConfig) -> Result<Services, ApplicationError> {
    config.validate().map_err(ApplicationError::Configuration)?;

    let geocoder: Arc<dyn GeocodingPort> = Arc::new(PlacesGeocodingAdapter::new(&config.places)?);
    let catalog: Arc<dyn CatalogPort> = Arc::new(SimbadCatalogAdapter::new(&config.simbad)?);
    let images: Arc<dyn ImagePort> = Arc::new(CutoutImageAdapter::new(&config.publishing)?);
    let blog: Arc<dyn BlogPort> = Arc::new(BlogAdapter::new(&config.publishing)?);
    let social: Arc<dyn SocialPort> = if config.bot.dry_run && config.twitter.bearer_token.is_empty() {
        Arc::new(OfflineSocial)
    } else {
        Arc::new(TwitterSocialAdapter::new(&config.twitter)?)
    };

    let settings = SkyReplySettings {
        bot_handle: config.bot.handle.clone(),
        dry_run: config.bot.dry_run,
        budget: config.reply,
    };

    let sky_reply = SkyReplyService::new(
        build_classifier(config)?,
        LocationResolver::new(geocoder),
        ObjectMatcher::new(catalog, config.catalog.clone()),
        Arc::clone(&social),
        images,
        blog,
        settings,
    );

    info!(
        handle = %config.bot.handle,
        dry_run = config.bot.dry_run,
        radius = config.catalog.search_radius_degrees,
        "Services initialized"
    );
    Ok(Services { sky_reply, social })
}
