//! Stream payload models

use serde::{Deserialize, Serialize};

use crate::error::TwitterError;

/// One decoded stream payload
///
/// Every field is optional: keep-alives and non-status objects such as
/// deletion notices decode to a record with nothing set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamRecord {
    /// Status id
    pub id: Option<String>,
    /// Status text
    pub text: Option<String>,
    /// Author screen name
    pub author: Option<String>,
    /// Creation time in platform format
    pub created_at: Option<String>,
    /// Author's platform time zone label
    pub time_zone: Option<String>,
}

impl StreamRecord {
    /// Whether nothing was decoded
    pub const fn is_keep_alive(&self) -> bool {
        self.id.is_none()
            && self.text.is_none()
            && self.author.is_none()
            && self.created_at.is_none()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawStatus {
    id_str: Option<String>,
    text: Option<String>,
    full_text: Option<String>,
    created_at: Option<String>,
    user: Option<RawUser>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawUser {
    screen_name: Option<String>,
    time_zone: Option<String>,
}

impl From<RawStatus> for StreamRecord {
    fn from(raw: RawStatus) -> Self {
        let (author, time_zone) = raw
            .user
            .map_or((None, None), |u| (u.screen_name, u.time_zone));
        Self {
            id: raw.id_str,
            text: raw.full_text.or(raw.text),
            author,
            created_at: raw.created_at,
            time_zone,
        }
    }
}

/// Decode one stream line
///
/// Blank lines are keep-alives.
pub fn parse_line(line: &str) -> Result<StreamRecord, TwitterError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(StreamRecord::default());
    }

    let raw: RawStatus = serde_json::from_str(line)
        .map_err(|e| TwitterError::ParseError(format!("stream line: {e}")))?;
    Ok(raw.into())
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusResponse {
    pub id_str: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MediaResponse {
    pub media_id_string: String,
}
