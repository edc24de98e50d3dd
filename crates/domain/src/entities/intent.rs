//! Classified intent of an inbound message

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Timezone;

/// Author and timing details carried by every actionable intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContext {
    /// Author handle without the mention sigil
    pub username: String,
    /// Message creation instant
    pub timestamp: DateTime<Utc>,
    /// Author's zone, mapped from the platform profile label
    pub time_zone: Timezone,
    /// Whether the message opened with the dot-reply marker
    #[serde(default)]
    pub reply_marker: bool,
}

impl MessageContext {
    /// Create a context
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        timestamp: DateTime<Utc>,
        time_zone: Timezone,
        reply_marker: bool,
    ) -> Self {
        Self {
            username: username.into(),
            timestamp,
            time_zone,
            reply_marker,
        }
    }

    /// The message instant in the author's zone
    #[must_use]
    pub fn local_time(&self) -> DateTime<Tz> {
        self.timestamp.with_timezone(&self.time_zone.tz())
    }
}

/// What an inbound message asks of the bot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// "@bot follow"
    Follow { context: MessageContext },
    /// "@bot unfollow"
    Unfollow { context: MessageContext },
    /// Message addressed to the bot; the payload is a place name
    DirectRequest {
        raw_location_text: String,
        context: MessageContext,
    },
    /// Unaddressed message that mentions a place
    EmbeddedLocation {
        extracted_location_text: String,
        context: MessageContext,
    },
    /// The bot is mentioned mid-message
    PassiveMention,
    /// Nothing for the bot to do
    Irrelevant,
    /// Transport keep-alive or malformed record
    NotAMessage,
}

impl Intent {
    /// Author and timing details, present on actionable intents
    #[must_use]
    pub const fn context(&self) -> Option<&MessageContext> {
        match self {
            Self::Follow { context }
            | Self::Unfollow { context }
            | Self::DirectRequest { context, .. }
            | Self::EmbeddedLocation { context, .. } => Some(context),
            Self::PassiveMention | Self::Irrelevant | Self::NotAMessage => None,
        }
    }

    /// Author handle, present on actionable intents
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.context().map(|c| c.username.as_str())
    }

    /// Place text to resolve, for location-bearing intents
    #[must_use]
    pub fn location_text(&self) -> Option<&str> {
        match self {
            Self::DirectRequest {
                raw_location_text, ..
            } => Some(raw_location_text),
            Self::EmbeddedLocation {
                extracted_location_text,
                ..
            } => Some(extracted_location_text),
            _ => None,
        }
    }

    /// Whether the bot should act on this intent
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        self.context().is_some()
    }

    /// Short machine-readable name of the case
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Follow { .. } => "follow",
            Self::Unfollow { .. } => "unfollow",
            Self::DirectRequest { .. } => "direct_request",
            Self::EmbeddedLocation { .. } => "embedded_location",
            Self::PassiveMention => "passive_mention",
            Self::Irrelevant => "irrelevant",
            Self::NotAMessage => "not_a_message",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.username(), self.location_text()) {
            (Some(user), Some(place)) => write!(f, "{} from @{user}: {place:?}", self.kind()),
            (Some(user), None) => write!(f, "{} from @{user}", self.kind()),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn context() -> MessageContext {
        let ts = Utc.with_ymd_and_hms(2014, 11, 8, 21, 30, 0).single().expect("valid");
        MessageContext::new("stargazer", ts, Timezone::new("Europe/London"), false)
    }

    #[test]
    fn actionable_intents_expose_context() {
        let intent = Intent::DirectRequest {
            raw_location_text: "Paris".to_string(),
            context: context(),
        };
        assert!(intent.is_actionable());
        assert_eq!(intent.username(), Some("stargazer"));
        assert_eq!(intent.location_text(), Some("Paris"));
    }

    #[test]
    fn follow_has_no_location() {
        let intent = Intent::Follow { context: context() };
        assert_eq!(intent.location_text(), None);
        assert_eq!(intent.kind(), "follow");
    }

    #[test]
    fn passive_cases_have_no_context() {
        for intent in [Intent::PassiveMention, Intent::Irrelevant, Intent::NotAMessage] {
            assert!(!intent.is_actionable());
            assert!(intent.username().is_none());
        }
    }

    #[test]
    fn local_time_uses_author_zone() {
        let ctx = MessageContext::new(
            "kiwi",
            Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).single().expect("valid"),
            Timezone::new("Pacific/Auckland"),
            false,
        );
        assert_eq!(ctx.local_time().format("%H:%M").to_string(), "13:00");
    }

    #[test]
    fn display_formats() {
        let intent = Intent::EmbeddedLocation {
            extracted_location_text: "Rome".to_string(),
            context: context(),
        };
        assert_eq!(intent.to_string(), "embedded_location from @stargazer: \"Rome\"");
        assert_eq!(Intent::Irrelevant.to_string(), "irrelevant");
    }

    #[test]
    fn serializes_with_type_tag() {
        let intent = Intent::Unfollow { context: context() };
        let json = serde_json::to_value(&intent).expect("serialize");
        assert_eq!(json["type"], "unfollow");
        assert_eq!(json["context"]["username"], "stargazer");

        let back: Intent = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, intent);
    }
}
