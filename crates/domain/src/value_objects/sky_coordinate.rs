//! Equatorial sky coordinate value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A position on the celestial sphere (right ascension, declination) in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyCoordinate {
    /// Right ascension in degrees [0, 360)
    right_ascension: f64,
    /// Declination in degrees [-90, 90]
    declination: f64,
}

impl SkyCoordinate {
    /// Create a coordinate, folding right ascension into [0, 360)
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if either value is not finite or the
    /// declination is outside [-90, 90].
    pub fn new(right_ascension: f64, declination: f64) -> Result<Self, DomainError> {
        if !right_ascension.is_finite() || !(-90.0..=90.0).contains(&declination) {
            return Err(DomainError::InvalidCoordinates(format!(
                "ra={right_ascension}, dec={declination}"
            )));
        }
        Ok(Self {
            right_ascension: normalize_degrees(right_ascension),
            declination,
        })
    }

    /// Build from values already known to be in range
    pub(crate) const fn new_unchecked(right_ascension: f64, declination: f64) -> Self {
        Self {
            right_ascension,
            declination,
        }
    }

    /// Parse catalog sexagesimal text: RA as "HH MM SS.sss", Dec as "+DD MM SS.ss"
    ///
    /// # Errors
    ///
    /// Returns `InvalidSexagesimal` if either field does not have three
    /// numeric components or the result is out of range.
    pub fn from_sexagesimal(ra_text: &str, dec_text: &str) -> Result<Self, DomainError> {
        let (_, hours) = parse_sexagesimal(ra_text)?;
        if !(0.0..24.0).contains(&hours) {
            return Err(DomainError::InvalidSexagesimal(ra_text.to_string()));
        }

        let (sign, degrees) = parse_sexagesimal(dec_text)?;
        let declination = sign * degrees;
        if !(-90.0..=90.0).contains(&declination) {
            return Err(DomainError::InvalidSexagesimal(dec_text.to_string()));
        }

        Self::new(hours * 15.0, declination)
    }

    /// Get the right ascension in degrees
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Get the declination in degrees
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Great-circle separation to another coordinate, in degrees
    ///
    /// Uses the haversine form, which stays accurate for the small
    /// separations of a cone search.
    #[must_use]
    pub fn angular_separation(&self, other: &Self) -> f64 {
        let dec1 = self.declination.to_radians();
        let dec2 = other.declination.to_radians();
        let delta_dec = (other.declination - self.declination).to_radians();
        let delta_ra = (other.right_ascension - self.right_ascension).to_radians();

        let a = (dec1.cos() * dec2.cos()).mul_add(
            (delta_ra / 2.0).sin().powi(2),
            (delta_dec / 2.0).sin().powi(2),
        );
        let c = 2.0 * a.sqrt().atan2((1.0 - a).max(0.0).sqrt());

        c.to_degrees()
    }

    /// Format as sexagesimal text ("05h 35m 17.3s +22° 00' 52\"")
    #[must_use]
    pub fn to_sexagesimal(&self) -> String {
        let (h, m, s) = split_sexagesimal(self.right_ascension / 15.0);
        let sign = if self.declination < 0.0 { '-' } else { '+' };
        let (d, am, asec) = split_sexagesimal(self.declination.abs());
        format!("{h:02}h {m:02}m {s:04.1}s {sign}{d:02}° {am:02}' {asec:02.0}\"")
    }
}

impl fmt::Display for SkyCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RA {:.4}°, Dec {:+.4}°",
            self.right_ascension, self.declination
        )
    }
}

/// Fold an angle into [0, 360)
pub(crate) fn normalize_degrees(value: f64) -> f64 {
    let folded = value.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if folded >= 360.0 { 0.0 } else { folded }
}

/// Parse "[+-]AA BB CC.cc" into (sign, AA + BB/60 + CC/3600)
fn parse_sexagesimal(text: &str) -> Result<(f64, f64), DomainError> {
    let invalid = || DomainError::InvalidSexagesimal(text.to_string());

    let trimmed = text.trim();
    let (sign, body) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };

    let parts: Vec<f64> = body
        .split_whitespace()
        .map(str::parse::<f64>)
        .collect::<Result<_, _>>()
        .map_err(|_| invalid())?;

    let [major, minutes, seconds] = parts.as_slice() else {
        return Err(invalid());
    };
    if *major < 0.0 || !(0.0..60.0).contains(minutes) || !(0.0..60.0).contains(seconds) {
        return Err(invalid());
    }

    Ok((sign, major + minutes / 60.0 + seconds / 3600.0))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn split_sexagesimal(value: f64) -> (u32, u32, f64) {
    let major = value.trunc();
    let minutes_total = (value - major) * 60.0;
    let minutes = minutes_total.trunc();
    let seconds = (minutes_total - minutes) * 60.0;
    (major as u32, minutes as u32, seconds)
}
