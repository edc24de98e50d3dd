//! Intent classifier - Turns an inbound record into a typed [`Intent`]
//!
//! Addressing is decided from the token order alone. Only messages that do
//! not mention the bot are sent to the tagger, which looks for place names.

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};
use domain::{Intent, MessageContext};
use tracing::{debug, instrument};

use super::time_utils::{parse_platform_timestamp, time_zone_name};
use crate::{
    error::ApplicationError,
    ports::{InboundRecord, TaggedToken, TaggerPort},
};

/// Leading "dot-reply" mark that makes a reply visible to all followers
pub const REPLY_MARKER: char = '.';

/// Sigil that starts a mention token
pub const MENTION_SIGIL: char = '@';

/// Word substituted for mentions before tagging
pub const MENTION_PLACEHOLDER: &str = "someone";

/// How a message addresses the bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Addressing {
    /// The bot handle comes before any ordinary word
    Direct {
        /// Non-mention tokens after the handle
        payload: String,
    },
    /// The bot handle follows at least one ordinary word
    Passive,
    /// No bot handle; mentions replaced by the placeholder
    Unaddressed {
        /// Text to feed to the tagger
        sanitized: String,
    },
}

/// What a direct payload asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectCommand {
    /// "follow"
    Follow,
    /// "unfollow"
    Unfollow,
    /// Anything else, treated as a place
    Location,
}

/// Split off the reply marker
#[must_use]
pub fn strip_reply_marker(text: &str) -> (bool, &str) {
    let trimmed = text.trim_start();
    match trimmed.strip_prefix(REPLY_MARKER) {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    }
}

/// Whether `token` is a mention of `handle`, ignoring case and trailing punctuation
#[must_use]
pub fn is_handle_token(token: &str, handle: &str) -> bool {
    let handle = handle.trim_start_matches(MENTION_SIGIL);
    token
        .strip_prefix(MENTION_SIGIL)
        .map(|name| name.trim_end_matches(|c: char| c.is_ascii_punctuation() && c != '_'))
        .is_some_and(|name| !name.is_empty() && name.eq_ignore_ascii_case(handle))
}

/// Walk the tokens once and decide how the bot is addressed
#[must_use]
pub fn scan_addressing(text: &str, handle: &str) -> Addressing {
    let mut direct = false;
    let mut seen_ordinary = false;
    let mut payload: Vec<&str> = Vec::new();
    let mut sanitized: Vec<&str> = Vec::new();

    for token in text.split_whitespace() {
        if is_handle_token(token, handle) {
            if seen_ordinary && !direct {
                return Addressing::Passive;
            }
            direct = true;
            sanitized.push(MENTION_PLACEHOLDER);
        } else if token.starts_with(MENTION_SIGIL) {
            sanitized.push(MENTION_PLACEHOLDER);
        } else {
            seen_ordinary = true;
            if direct {
                payload.push(token);
            }
            sanitized.push(token);
        }
    }

    if direct {
        Addressing::Direct {
            payload: payload.join(" "),
        }
    } else {
        Addressing::Unaddressed {
            sanitized: sanitized.join(" "),
        }
    }
}

/// Remove punctuation and fold case
#[must_use]
pub fn normalize_words(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Refine a direct payload into a command
#[must_use]
pub fn refine_direct(payload: &str) -> DirectCommand {
    match normalize_words(payload).as_str() {
        "follow" => DirectCommand::Follow,
        "unfollow" => DirectCommand::Unfollow,
        _ => DirectCommand::Location,
    }
}

/// Longest contiguous run of location-tagged tokens
///
/// A location token starting with a comma is appended to the most recent
/// run, even one already closed, and glued to its predecessor without a
/// space. With no earlier run it starts a new one, minus the comma.
/// Equal-length runs keep the earlier one. The last run is considered even
/// when it ends the input.
#[must_use]
pub fn longest_location_run(tokens: &[TaggedToken]) -> Option<String> {
    let mut best: Option<Vec<&str>> = None;
    let mut current: Vec<&str> = Vec::new();
    let mut last_closed: Option<Vec<&str>> = None;

    for tagged in tokens {
        let token = tagged.token.as_str();
        if !tagged.is_location() {
            if let Some(closed) = close_run(&mut current, &mut best) {
                last_closed = Some(closed);
            }
            continue;
        }

        if current.is_empty() && token.starts_with(',') {
            match last_closed.take() {
                Some(previous) => current = previous,
                None => {
                    let bare = token.trim_start_matches(',').trim_start();
                    if !bare.is_empty() {
                        current.push(bare);
                    }
                    continue;
                },
            }
        }
        current.push(token);
    }
    close_run(&mut current, &mut best);

    best.map(|run| join_run(&run))
}

/// Record `run` as best if strictly longer, then hand it back emptied out
fn close_run<'a>(
    run: &mut Vec<&'a str>,
    best: &mut Option<Vec<&'a str>>,
) -> Option<Vec<&'a str>> {
    if run.is_empty() {
        return None;
    }
    if best.as_ref().is_none_or(|b| run.len() > b.len()) {
        *best = Some(run.clone());
    }
    Some(std::mem::take(run))
}

fn join_run(run: &[&str]) -> String {
    let mut text = String::new();
    for token in run {
        if !text.is_empty() && !token.starts_with(',') {
            text.push(' ');
        }
        text.push_str(token);
    }
    text
}

/// Service that classifies inbound records
pub struct IntentClassifier {
    tagger: Arc<dyn TaggerPort>,
    bot_handle: String,
}

impl fmt::Debug for IntentClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntentClassifier")
            .field("bot_handle", &self.bot_handle)
            .finish_non_exhaustive()
    }
}

impl IntentClassifier {
    /// Create a classifier for the given bot handle ("@WhatsAboveMe")
    pub fn new(tagger: Arc<dyn TaggerPort>, bot_handle: impl Into<String>) -> Self {
        Self {
            tagger,
            bot_handle: bot_handle.into(),
        }
    }

    /// The configured bot handle
    pub fn bot_handle(&self) -> &str {
        &self.bot_handle
    }

    /// Classify one record
    ///
    /// Records missing text, author or a parseable timestamp are
    /// `NotAMessage`. Tagger failures propagate.
    #[instrument(skip(self, record), fields(id = ?record.id))]
    pub async fn classify(&self, record: &InboundRecord) -> Result<Intent, ApplicationError> {
        let Some((text, username, timestamp)) = Self::message_parts(record) else {
            debug!("Record is not a message");
            return Ok(Intent::NotAMessage);
        };

        let (reply_marker, body) = strip_reply_marker(text);
        let context = MessageContext::new(
            username,
            timestamp,
            time_zone_name(record.time_zone.as_deref()),
            reply_marker,
        );

        let intent = match scan_addressing(body, &self.bot_handle) {
            Addressing::Passive => Intent::PassiveMention,
            Addressing::Direct { payload } => match refine_direct(&payload) {
                DirectCommand::Follow => Intent::Follow { context },
                DirectCommand::Unfollow => Intent::Unfollow { context },
                DirectCommand::Location => Intent::DirectRequest {
                    raw_location_text: payload,
                    context,
                },
            },
            Addressing::Unaddressed { sanitized } => {
                let tags = self.tagger.tag(&sanitized).await?;
                match longest_location_run(&tags) {
                    Some(extracted_location_text) => Intent::EmbeddedLocation {
                        extracted_location_text,
                        context,
                    },
                    None => Intent::Irrelevant,
                }
            },
        };

        debug!(intent = %intent, "Classified message");
        Ok(intent)
    }

    fn message_parts(record: &InboundRecord) -> Option<(&str, &str, DateTime<Utc>)> {
        let text = record.text.as_deref()?;
        let author = record.author.as_deref()?;
        let created_at = record.created_at.as_deref()?;
        let timestamp = parse_platform_timestamp(created_at).ok()?;
        Some((text, author.trim_start_matches(MENTION_SIGIL), timestamp))
    }
}
