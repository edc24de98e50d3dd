//! Nearest object matcher - Picks the catalog entry closest to a sky position
//!
//! Rows with truncated sexagesimal positions are discarded before ranking so
//! that low-precision entries cannot win on rounding alone.

use std::{
    fmt,
    sync::{Arc, LazyLock},
};

use domain::{CelestialObject, SkyCoordinate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{CatalogPort, CatalogQuery, CatalogRow},
};

/// Speed of light in km/s
pub const SPEED_OF_LIGHT_KM_S: f64 = 299_792.458;

/// Default cone radius in degrees
pub const DEFAULT_SEARCH_RADIUS_DEGREES: f64 = 0.25;

/// Photometric bands in preference order: visual first, then descending wavelength
pub const DEFAULT_MAGNITUDE_BANDS: [&str; 9] = ["V", "K", "H", "J", "I", "R", "G", "B", "U"];

/// Catalog field carrying a spectroscopic redshift
pub const REDSHIFT_FIELD: &str = "redshift";

/// Catalog field carrying a radial velocity in km/s
pub const RADIAL_VELOCITY_FIELD: &str = "radial_velocity";

#[allow(clippy::expect_used)]
static RA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2} \d{2} \d{2}\.\d{3,}$").expect("valid RA pattern"));

#[allow(clippy::expect_used)]
static DEC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]\d{2} \d{2} \d{2}\.\d{2,}$").expect("valid Dec pattern"));

/// Whether both position fields are at the catalog's full precision
#[must_use]
pub fn has_full_precision(row: &CatalogRow) -> bool {
    RA_PATTERN.is_match(&row.ra_text) && DEC_PATTERN.is_match(&row.dec_text)
}

/// One entry of an ordered attribute fallback table
#[derive(Debug, Clone)]
pub struct FieldRule {
    /// Catalog field name
    pub field: String,
    /// Conversion applied to the raw value
    pub transform: fn(f64) -> f64,
}

impl FieldRule {
    /// Rule that takes the field value as-is
    pub fn identity(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            transform: std::convert::identity,
        }
    }

    /// Rule with a conversion
    pub fn with_transform(field: impl Into<String>, transform: fn(f64) -> f64) -> Self {
        Self {
            field: field.into(),
            transform,
        }
    }
}

fn velocity_to_redshift(velocity_km_s: f64) -> f64 {
    velocity_km_s / SPEED_OF_LIGHT_KM_S
}

/// Redshift fallback: direct redshift, then radial velocity over c
#[must_use]
pub fn redshift_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::identity(REDSHIFT_FIELD),
        FieldRule::with_transform(RADIAL_VELOCITY_FIELD, velocity_to_redshift),
    ]
}

/// Magnitude fallback over `flux_<band>` fields in the given band order
#[must_use]
pub fn magnitude_rules<S: AsRef<str>>(bands: &[S]) -> Vec<FieldRule> {
    bands
        .iter()
        .map(|band| FieldRule::identity(format!("flux_{}", band.as_ref())))
        .collect()
}

/// First present value in rule order, transformed
#[must_use]
pub fn first_present(row: &CatalogRow, rules: &[FieldRule]) -> Option<f64> {
    rules
        .iter()
        .find_map(|rule| row.field(&rule.field).map(rule.transform))
}

/// Matcher settings, read-only after startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Cone radius in degrees
    pub search_radius_degrees: f64,
    /// Photometric band preference order
    pub magnitude_bands: Vec<String>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            search_radius_degrees: DEFAULT_SEARCH_RADIUS_DEGREES,
            magnitude_bands: DEFAULT_MAGNITUDE_BANDS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Service that finds the nearest catalogued object
pub struct ObjectMatcher {
    catalog: Arc<dyn CatalogPort>,
    config: MatcherConfig,
    redshift_rules: Vec<FieldRule>,
    magnitude_rules: Vec<FieldRule>,
}

impl fmt::Debug for ObjectMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectMatcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ObjectMatcher {
    /// Create a matcher
    pub fn new(catalog: Arc<dyn CatalogPort>, config: MatcherConfig) -> Self {
        let magnitude_rules = magnitude_rules(&config.magnitude_bands);
        Self {
            catalog,
            config,
            redshift_rules: redshift_rules(),
            magnitude_rules,
        }
    }

    /// Configured cone radius in degrees
    pub fn search_radius(&self) -> f64 {
        self.config.search_radius_degrees
    }

    /// Fields requested from the catalog, derived from the fallback tables
    pub fn requested_fields(&self) -> Vec<String> {
        self.redshift_rules
            .iter()
            .chain(&self.magnitude_rules)
            .map(|rule| rule.field.clone())
            .collect()
    }

    /// Nearest object within `search_radius_degrees` of `coordinate`
    #[instrument(skip(self), fields(coordinate = %coordinate))]
    pub async fn find_nearest(
        &self,
        coordinate: SkyCoordinate,
        search_radius_degrees: f64,
    ) -> Result<CelestialObject, ApplicationError> {
        let query = CatalogQuery {
            coordinate,
            radius_degrees: search_radius_degrees,
            fields: self.requested_fields(),
        };
        let rows = self.catalog.region_query(&query).await?;
        debug!(rows = rows.len(), "Catalog query returned");

        self.select_nearest(coordinate, &rows)
            .ok_or_else(|| ApplicationError::NoObjectFound(coordinate.to_string()))
    }

    /// Rank rows by angular separation; ties keep the earlier row
    pub fn select_nearest(
        &self,
        coordinate: SkyCoordinate,
        rows: &[CatalogRow],
    ) -> Option<CelestialObject> {
        let mut nearest: Option<(f64, &CatalogRow, SkyCoordinate)> = None;

        for row in rows.iter().filter(|row| has_full_precision(row)) {
            let position = match SkyCoordinate::from_sexagesimal(&row.ra_text, &row.dec_text) {
                Ok(position) => position,
                Err(e) => {
                    warn!(name = %row.name, error = %e, "Skipping catalog row");
                    continue;
                },
            };
            let separation = coordinate.angular_separation(&position);
            if nearest.as_ref().is_none_or(|(best, _, _)| separation < *best) {
                nearest = Some((separation, row, position));
            }
        }

        nearest.map(|(separation, row, position)| {
            debug!(name = %row.name, separation, "Selected nearest object");
            CelestialObject::new(row.name.trim(), row.type_code.trim(), position)
                .with_redshift(first_present(row, &self.redshift_rules))
                .with_magnitude(first_present(row, &self.magnitude_rules))
        })
    }
}
