//! Location resolver - Free-form place text to coordinates
//!
//! Strict mode guards explicit location statements against loose partial
//! geocoder matches: the input must equal some leading run of the top
//! candidate's terms.

use std::{fmt, sync::Arc};

use domain::GeoLocation;
use tracing::{debug, instrument};

use super::intent_classifier::normalize_words;
use crate::{
    error::ApplicationError,
    ports::{GeocodingPort, PlaceCandidate},
};

/// Whether `text` equals a left-to-right prefix of the candidate's terms
///
/// Both sides are compared with punctuation removed, whitespace collapsed
/// and case folded.
#[must_use]
pub fn matches_term_prefix(candidate: &PlaceCandidate, text: &str) -> bool {
    let wanted = normalize_words(text);
    if wanted.is_empty() {
        return false;
    }

    (1..=candidate.terms.len()).any(|n| normalize_words(&candidate.terms[..n].join(" ")) == wanted)
}

/// Service that resolves place text through the geocoding port
pub struct LocationResolver {
    geocoder: Arc<dyn GeocodingPort>,
}

impl fmt::Debug for LocationResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationResolver").finish_non_exhaustive()
    }
}

impl LocationResolver {
    /// Create a resolver
    pub fn new(geocoder: Arc<dyn GeocodingPort>) -> Self {
        Self { geocoder }
    }

    /// Resolve `text` to a location using the top-ranked candidate
    #[instrument(skip(self))]
    pub async fn resolve(&self, text: &str, strict: bool) -> Result<GeoLocation, ApplicationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ApplicationError::LocationNotFound("empty location text".into()));
        }

        let candidates = self.geocoder.autocomplete(text).await?;
        let Some(top) = candidates.into_iter().next() else {
            debug!("Geocoder returned no candidates");
            return Err(ApplicationError::LocationNotFound(text.to_string()));
        };

        if strict && !matches_term_prefix(&top, text) {
            debug!(candidate = %top.description, "Strict match rejected candidate");
            return Err(ApplicationError::LocationNotFound(text.to_string()));
        }

        let details = self.geocoder.place_details(&top.place_id).await?;
        let location = GeoLocation::new(details.latitude, details.longitude, top.description)
            .map_err(|e| ApplicationError::ExternalService(format!("geocoder: {e}")))?;

        debug!(location = %location, "Resolved location");
        Ok(location)
    }
}
