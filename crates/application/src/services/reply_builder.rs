//! Reply builder - Fits reply text into the platform character budget
//!
//! The mandatory prefix is never shortened. Optional clauses are added in
//! priority order, each only if it fits in what is left after the current
//! text and the reserved media and link costs.

use domain::CelestialObject;
use serde::{Deserialize, Serialize};

/// Platform limit on reply length, in characters
pub const CHARACTERS_MAXIMUM: usize = 140;

/// Characters the platform charges for an attached image
pub const MEDIA_RESERVATION: usize = 23;

/// Characters the platform charges for any link
pub const URL_RESERVATION: usize = 22;

/// Connectives used after a location clause, most informative first
pub const CONNECTIVES_WITH_LOCATION: [&str; 4] = [
    " right now. Find out more at",
    " right now. More:",
    " now:",
    " ",
];

/// Connectives used when the location clause did not fit
pub const CONNECTIVES_WITHOUT_LOCATION: [&str; 4] = [
    " is above you right now. Find out more at",
    " is above you now. More:",
    " is above you:",
    " ",
];

const FOLLOW_EXPLANATIONS: [&str; 3] = [
    " I'm following you now, so I'll see your tweets. Mention a place and I'll tell you what's above it. Send \"unfollow\" to stop.",
    " I'm following you now. Mention a place and I'll tell you what's above it.",
    " Following you now!",
];

const UNFOLLOW_EXPLANATIONS: [&str; 3] = [
    " I've unfollowed you and won't reply to places in your tweets any more. Send \"follow\" to start again.",
    " I've unfollowed you and won't reply to places in your tweets.",
    " Unfollowed!",
];

/// Character budget for one reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplyBudget {
    /// Platform maximum
    pub characters_maximum: usize,
    /// Reserved for an attached image
    pub media_reservation: usize,
    /// Reserved for the trailing link
    pub url_reservation: usize,
}

impl Default for ReplyBudget {
    fn default() -> Self {
        Self {
            characters_maximum: CHARACTERS_MAXIMUM,
            media_reservation: MEDIA_RESERVATION,
            url_reservation: URL_RESERVATION,
        }
    }
}

impl ReplyBudget {
    /// Budget for replies that carry neither image nor link
    #[must_use]
    pub const fn text_only(characters_maximum: usize) -> Self {
        Self {
            characters_maximum,
            media_reservation: 0,
            url_reservation: 0,
        }
    }

    /// Characters reserved after the text
    #[must_use]
    pub const fn reserved(&self) -> usize {
        self.media_reservation + self.url_reservation
    }

    /// Characters available for text
    #[must_use]
    pub const fn available(&self) -> usize {
        self.characters_maximum.saturating_sub(self.reserved())
    }
}

/// Whether the inbound message used the dot-reply marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressingMode {
    /// Plain "@user" reply
    #[default]
    Plain,
    /// ".@user" reply, visible to all followers
    DotReply,
}

impl AddressingMode {
    /// Mode matching the inbound marker
    #[must_use]
    pub const fn from_marker(reply_marker: bool) -> Self {
        if reply_marker {
            Self::DotReply
        } else {
            Self::Plain
        }
    }

    const fn prefix(self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::DotReply => ".",
        }
    }
}

/// One optional step of a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// Add the text if it fits
    Optional(String),
    /// Add the first candidate that fits, if any
    FirstFitting(Vec<String>),
}

impl Clause {
    /// Build a `FirstFitting` clause from string slices
    pub fn first_fitting(candidates: &[&str]) -> Self {
        Self::FirstFitting(candidates.iter().map(ToString::to_string).collect())
    }
}

/// Accumulates reply text against a budget during one synthesis pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyDraft {
    text: String,
    length: usize,
    characters_maximum: usize,
    reserved_suffix_length: usize,
}

/// Space between the text and a trailing link
const LINK_SEPARATOR: char = ' ';

impl ReplyDraft {
    /// Start a draft with its mandatory prefix
    ///
    /// When the budget reserves room for a link, one more character is held
    /// back for the space that separates it from the text.
    pub fn new(prefix: impl Into<String>, budget: &ReplyBudget) -> Self {
        let text = prefix.into();
        let separator = usize::from(budget.url_reservation > 0);
        Self {
            length: text.chars().count(),
            text,
            characters_maximum: budget.characters_maximum,
            reserved_suffix_length: budget.reserved() + separator,
        }
    }

    /// Current text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current length in characters
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Whether the draft has no text
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Characters still available for optional clauses
    pub const fn remaining(&self) -> usize {
        self.characters_maximum
            .saturating_sub(self.reserved_suffix_length)
            .saturating_sub(self.length)
    }

    /// Whether `candidate` fits in the remaining budget
    pub fn fits(&self, candidate: &str) -> bool {
        candidate.chars().count() <= self.remaining()
    }

    /// Append `candidate` if it fits
    pub fn try_push(&mut self, candidate: &str) -> bool {
        let cost = candidate.chars().count();
        if cost > self.remaining() {
            return false;
        }
        self.text.push_str(candidate);
        self.length += cost;
        true
    }

    /// Apply one clause; returns whether any text was added
    pub fn apply(&mut self, clause: &Clause) -> bool {
        match clause {
            Clause::Optional(text) => self.try_push(text),
            Clause::FirstFitting(candidates) => candidates.iter().any(|c| self.try_push(c)),
        }
    }

    /// Freeze the draft, appending `link` after a single space unless the
    /// text already ends in whitespace
    pub fn finish(mut self, link: &str) -> String {
        if link.is_empty() {
            return self.text;
        }
        if !self.text.ends_with(char::is_whitespace) {
            self.text.push(LINK_SEPARATOR);
        }
        self.text.push_str(link);
        self.text
    }

    /// Freeze the draft without a link
    pub fn into_text(self) -> String {
        self.text
    }
}

fn mention_prefix(addressing: AddressingMode, username: &str) -> String {
    format!("{}@{username}", addressing.prefix())
}

/// Compose the reply announcing `object` to `username`
///
/// `location_phrase` is the place as the user wrote it; `None` or blank
/// skips the location clause.
pub fn build_reply(
    object: &CelestialObject,
    link: &str,
    username: &str,
    addressing: AddressingMode,
    location_phrase: Option<&str>,
    budget: &ReplyBudget,
) -> String {
    let prefix = format!("{} {}", mention_prefix(addressing, username), object.name);
    let mut draft = ReplyDraft::new(prefix, budget);

    if let Some(description) = object.type_description() {
        draft.apply(&Clause::Optional(format!(", {description}")));
    }

    let located = location_phrase
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .is_some_and(|phrase| draft.apply(&Clause::Optional(format!(", is above {phrase}"))));

    let connectives = if located {
        &CONNECTIVES_WITH_LOCATION
    } else {
        &CONNECTIVES_WITHOUT_LOCATION
    };
    draft.apply(&Clause::first_fitting(connectives));

    draft.finish(link)
}

/// Explanatory reply to a follow request
pub fn build_follow_reply(username: &str, addressing: AddressingMode) -> String {
    explanation_reply(username, addressing, &FOLLOW_EXPLANATIONS)
}

/// Explanatory reply to an unfollow request
pub fn build_unfollow_reply(username: &str, addressing: AddressingMode) -> String {
    explanation_reply(username, addressing, &UNFOLLOW_EXPLANATIONS)
}

fn explanation_reply(username: &str, addressing: AddressingMode, candidates: &[&str]) -> String {
    let budget = ReplyBudget::text_only(CHARACTERS_MAXIMUM);
    let mut draft = ReplyDraft::new(mention_prefix(addressing, username), &budget);
    draft.apply(&Clause::first_fitting(candidates));
    draft.into_text()
}
