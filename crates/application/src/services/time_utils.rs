//! Platform timestamp and time-zone helpers

use chrono::{DateTime, Utc};
use domain::{DomainError, Timezone};

/// Timestamp layout used by the streaming transport
pub const PLATFORM_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Parse "Sat Nov 08 21:30:00 +0000 2014" into a UTC instant
pub fn parse_platform_timestamp(text: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_str(text.trim(), PLATFORM_TIMESTAMP_FORMAT)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DomainError::InvalidDateTime(format!("{text:?}: {e}")))
}

/// Format an instant back into the platform layout
#[must_use]
pub fn format_platform_timestamp(instant: DateTime<Utc>) -> String {
    instant.format(PLATFORM_TIMESTAMP_FORMAT).to_string()
}

/// Map the platform's profile zone label to a canonical zone, UTC if unknown
#[must_use]
pub fn time_zone_name(label: Option<&str>) -> Timezone {
    Timezone::from_platform_label(label)
}
