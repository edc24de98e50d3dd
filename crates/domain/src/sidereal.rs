//! Sidereal transform from a place on Earth to the point directly overhead
//!
//! Uses the linear Greenwich sidereal time approximation with no precession
//! or nutation terms. Adequate for picking the nearest catalogued object.

use chrono::{DateTime, TimeZone, Utc};

use crate::value_objects::{GeoLocation, SkyCoordinate, normalize_degrees};

/// J2000.0 reference epoch, 2000-01-01T12:00:00Z, as a unix timestamp
pub const J2000_UNIX_SECONDS: i64 = 946_728_000;

/// Greenwich sidereal time at the reference epoch, in hours
const GST_AT_EPOCH_HOURS: f64 = 18.697_374_558;

/// Sidereal hours elapsed per solar day
const SIDEREAL_HOURS_PER_DAY: f64 = 24.065_709_824_419_08;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// The reference epoch as a `DateTime`
#[must_use]
pub fn j2000_epoch() -> DateTime<Utc> {
    Utc.timestamp_opt(J2000_UNIX_SECONDS, 0)
        .single()
        .unwrap_or_default()
}

/// Greenwich sidereal time in hours (unreduced) at `instant`
#[must_use]
pub fn greenwich_sidereal_hours(instant: DateTime<Utc>) -> f64 {
    let elapsed = instant - j2000_epoch();
    let days = elapsed.num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY;
    SIDEREAL_HOURS_PER_DAY.mul_add(days, GST_AT_EPOCH_HOURS)
}

/// Zenith position above `location` at `instant`
///
/// Right ascension is the local sidereal angle folded into [0, 360);
/// declination is the latitude unchanged.
#[must_use]
pub fn to_sky_coordinate(location: &GeoLocation, instant: DateTime<Utc>) -> SkyCoordinate {
    let gst = greenwich_sidereal_hours(instant);
    let right_ascension = normalize_degrees(gst.mul_add(15.0, location.longitude()));

    // GeoLocation already bounds the latitude
    SkyCoordinate::new_unchecked(right_ascension, location.latitude())
}
