//! Sky reply service - Per-message dispatcher and inbound message loop
//!
//! Messages are processed strictly one at a time. Expected outcomes such as
//! an unknown place end one message quietly; other failures are logged and
//! the loop moves on to the next message.

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};
use domain::{
    CelestialObject, GeoLocation, Intent, MessageContext, SkyCoordinate, Timezone,
    to_sky_coordinate,
};
use futures::StreamExt;
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use super::{
    article::compose_article,
    intent_classifier::{IntentClassifier, is_handle_token},
    location_resolver::LocationResolver,
    object_matcher::ObjectMatcher,
    reply_builder::{
        AddressingMode, ReplyBudget, build_follow_reply, build_reply, build_unfollow_reply,
    },
};
use crate::{
    error::ApplicationError,
    ports::{Article, BlogPort, ImagePort, InboundRecord, InboundStream, OutgoingReply, SocialPort},
};

/// Link used in dry-run replies in place of a published article
pub const DRY_RUN_LINK: &str = "https://t.co/0000000000";

/// Dispatcher settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkyReplySettings {
    /// The bot's own handle, e.g. "@WhatsAboveMe"
    pub bot_handle: String,
    /// Compose replies without any side effects
    pub dry_run: bool,
    /// Character budget for replies
    pub budget: ReplyBudget,
}

impl SkyReplySettings {
    /// Settings for a handle with default budget
    pub fn new(bot_handle: impl Into<String>) -> Self {
        Self {
            bot_handle: bot_handle.into(),
            dry_run: false,
            budget: ReplyBudget::default(),
        }
    }

    /// Builder method to toggle dry-run mode
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Everything found for one place and instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkyReport {
    /// Resolved place
    pub location: GeoLocation,
    /// Point directly overhead
    pub zenith: SkyCoordinate,
    /// Nearest catalogued object
    pub object: CelestialObject,
    /// Blog article about the object
    pub article: Article,
}

/// A composed sky reply
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkyReply {
    /// Message being answered
    pub in_reply_to: Option<String>,
    /// Author of that message
    pub username: String,
    /// Lookup results
    pub report: SkyReport,
    /// Published article link
    pub link: String,
    /// Final reply text
    pub text: String,
    /// Whether an image was attached
    pub has_image: bool,
    /// Whether the reply was actually posted
    pub posted: bool,
}

/// Result of handling one message that produced a reply
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The bot followed the author
    Followed {
        /// Author handle
        username: String,
        /// Explanatory reply
        reply: String,
    },
    /// The bot unfollowed the author
    Unfollowed {
        /// Author handle
        username: String,
        /// Explanatory reply
        reply: String,
    },
    /// The bot answered with the object overhead
    Replied(Box<SkyReply>),
}

/// Counters for one run of the message loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Records read from the stream
    pub received: usize,
    /// Records that produced a reply
    pub replied: usize,
    /// Records dropped without a reply
    pub ignored: usize,
    /// Records whose processing failed
    pub failed: usize,
}

/// Dispatcher tying the pipeline to the social platform
pub struct SkyReplyService {
    classifier: IntentClassifier,
    resolver: LocationResolver,
    matcher: ObjectMatcher,
    social: Arc<dyn SocialPort>,
    images: Arc<dyn ImagePort>,
    blog: Arc<dyn BlogPort>,
    settings: SkyReplySettings,
}

impl fmt::Debug for SkyReplyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkyReplyService")
            .field("classifier", &self.classifier)
            .field("matcher", &self.matcher)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl SkyReplyService {
    /// Create a dispatcher
    pub fn new(
        classifier: IntentClassifier,
        resolver: LocationResolver,
        matcher: ObjectMatcher,
        social: Arc<dyn SocialPort>,
        images: Arc<dyn ImagePort>,
        blog: Arc<dyn BlogPort>,
        settings: SkyReplySettings,
    ) -> Self {
        Self {
            classifier,
            resolver,
            matcher,
            social,
            images,
            blog,
            settings,
        }
    }

    /// Dispatcher settings
    pub const fn settings(&self) -> &SkyReplySettings {
        &self.settings
    }

    /// The classifier, for callers that only want the intent
    pub const fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    /// Whether the record was written by the bot itself
    pub fn is_self_authored(&self, record: &InboundRecord) -> bool {
        record.author.as_deref().is_some_and(|author| {
            let mention = format!("@{}", author.trim_start_matches('@'));
            is_handle_token(&mention, &self.settings.bot_handle)
        })
    }

    /// Consume the stream one message at a time until it ends
    ///
    /// Per-message failures are logged and counted. A transport error
    /// ends the loop.
    pub async fn run(&self, mut stream: InboundStream) -> Result<RunSummary, ApplicationError> {
        let mut summary = RunSummary::default();
        info!(dry_run = self.settings.dry_run, "Listening for messages");

        while let Some(item) = stream.next().await {
            let record = item?;
            summary.received += 1;

            match self.handle(&record).await {
                Ok(Some(outcome)) => {
                    summary.replied += 1;
                    debug!(outcome = ?outcome, "Message handled");
                },
                Ok(None) => summary.ignored += 1,
                Err(e) => {
                    summary.failed += 1;
                    error!(
                        error = %e,
                        id = ?record.id,
                        transient = e.is_retryable(),
                        "Failed to process message"
                    );
                },
            }
        }

        info!(
            received = summary.received,
            replied = summary.replied,
            failed = summary.failed,
            "Message stream ended"
        );
        Ok(summary)
    }

    /// Process one record; `Ok(None)` means no reply is due
    #[instrument(skip(self, record), fields(id = ?record.id, author = ?record.author))]
    pub async fn handle(&self, record: &InboundRecord) -> Result<Option<Outcome>, ApplicationError> {
        if self.is_self_authored(record) {
            debug!("Ignoring own message");
            return Ok(None);
        }

        let result = match self.classifier.classify(record).await {
            Ok(intent) => self.dispatch(record, intent).await,
            Err(e) => Err(e),
        };

        match result {
            Err(e) if e.is_expected() => {
                info!(reason = %e, "No reply for message");
                Ok(None)
            },
            other => other,
        }
    }

    async fn dispatch(
        &self,
        record: &InboundRecord,
        intent: Intent,
    ) -> Result<Option<Outcome>, ApplicationError> {
        match intent {
            Intent::Follow { context } => self.follow(record, &context).await.map(Some),
            Intent::Unfollow { context } => self.unfollow(record, &context).await.map(Some),
            Intent::DirectRequest {
                raw_location_text,
                context,
            } => self
                .sky_reply(record, &context, &raw_location_text, false)
                .await
                .map(|reply| Some(Outcome::Replied(Box::new(reply)))),
            Intent::EmbeddedLocation {
                extracted_location_text,
                context,
            } => self
                .sky_reply(record, &context, &extracted_location_text, true)
                .await
                .map(|reply| Some(Outcome::Replied(Box::new(reply)))),
            Intent::PassiveMention => {
                debug!("Passive mention, nothing to do");
                Ok(None)
            },
            Intent::Irrelevant => {
                debug!("No location in message");
                Ok(None)
            },
            Intent::NotAMessage => Err(ApplicationError::NotAMessage),
        }
    }

    async fn follow(
        &self,
        record: &InboundRecord,
        context: &MessageContext,
    ) -> Result<Outcome, ApplicationError> {
        let reply = build_follow_reply(
            &context.username,
            AddressingMode::from_marker(context.reply_marker),
        );
        if !self.settings.dry_run {
            self.social.follow(&context.username).await?;
            self.post(OutgoingReply::new(reply.clone(), record.id.clone()))
                .await?;
        }
        info!(username = %context.username, "Followed user");
        Ok(Outcome::Followed {
            username: context.username.clone(),
            reply,
        })
    }

    async fn unfollow(
        &self,
        record: &InboundRecord,
        context: &MessageContext,
    ) -> Result<Outcome, ApplicationError> {
        let reply = build_unfollow_reply(
            &context.username,
            AddressingMode::from_marker(context.reply_marker),
        );
        if !self.settings.dry_run {
            self.social.unfollow(&context.username).await?;
            self.post(OutgoingReply::new(reply.clone(), record.id.clone()))
                .await?;
        }
        info!(username = %context.username, "Unfollowed user");
        Ok(Outcome::Unfollowed {
            username: context.username.clone(),
            reply,
        })
    }

    /// Resolve a place and find what is overhead at `instant`
    #[instrument(skip(self, time_zone))]
    pub async fn report(
        &self,
        location_text: &str,
        strict: bool,
        instant: DateTime<Utc>,
        time_zone: &Timezone,
    ) -> Result<SkyReport, ApplicationError> {
        let location = self.resolver.resolve(location_text, strict).await?;
        let zenith = to_sky_coordinate(&location, instant);
        debug!(zenith = %zenith, "Computed zenith");

        let object = self
            .matcher
            .find_nearest(zenith, self.matcher.search_radius())
            .await?;

        let local_time = instant.with_timezone(&time_zone.tz());
        let article = compose_article(&object, &location, zenith, local_time);

        Ok(SkyReport {
            location,
            zenith,
            object,
            article,
        })
    }

    async fn sky_reply(
        &self,
        record: &InboundRecord,
        context: &MessageContext,
        location_text: &str,
        strict: bool,
    ) -> Result<SkyReply, ApplicationError> {
        let report = self
            .report(location_text, strict, context.timestamp, &context.time_zone)
            .await?;

        let (image, link) = if self.settings.dry_run {
            (None, DRY_RUN_LINK.to_string())
        } else {
            let image = match self.images.fetch_image(&report.object).await {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    warn!(error = %e, object = %report.object.name, "Image fetch failed, replying without image");
                    None
                },
            };
            let link = self.blog.publish(&report.article).await?;
            (image, link)
        };

        let text = build_reply(
            &report.object,
            &link,
            &context.username,
            AddressingMode::from_marker(context.reply_marker),
            Some(location_text),
            &self.settings.budget,
        );

        let has_image = image.is_some();
        let posted = !self.settings.dry_run;
        if posted {
            self.post(OutgoingReply::new(text.clone(), record.id.clone()).with_image(image))
                .await?;
        }
        info!(object = %report.object.name, posted, "Sky reply composed");

        Ok(SkyReply {
            in_reply_to: record.id.clone(),
            username: context.username.clone(),
            report,
            link,
            text,
            has_image,
            posted,
        })
    }

    async fn post(&self, reply: OutgoingReply) -> Result<(), ApplicationError> {
        debug!(text = %reply.text, "Posting reply");
        self.social.post_reply(&reply).await
    }
}
