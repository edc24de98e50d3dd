//! Application services - Use case implementations

pub mod article;
pub mod intent_classifier;
mod location_resolver;
mod object_matcher;
pub mod reply_builder;
mod sky_reply_service;
pub mod time_utils;

pub use article::{comoving_distance_light_years, compose_article, wordify_number};
pub use intent_classifier::{
    Addressing, DirectCommand, IntentClassifier, longest_location_run, scan_addressing,
};
pub use location_resolver::{LocationResolver, matches_term_prefix};
pub use object_matcher::{
    DEFAULT_MAGNITUDE_BANDS, DEFAULT_SEARCH_RADIUS_DEGREES, MatcherConfig, ObjectMatcher,
    has_full_precision,
};
pub use reply_builder::{AddressingMode, ReplyBudget, build_reply};
pub use sky_reply_service::{
    DRY_RUN_LINK, Outcome, RunSummary, SkyReply, SkyReplyService, SkyReplySettings, SkyReport,
};
pub use time_utils::parse_platform_timestamp;
