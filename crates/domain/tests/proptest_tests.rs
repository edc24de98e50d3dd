//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use chrono::{TimeZone, Utc};
use domain::value_objects::{GeoLocation, SkyCoordinate, Timezone};
use domain::{ObjectType, to_sky_coordinate};
use proptest::prelude::*;

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon, "somewhere");
            prop_assert!(result.is_ok());

            let loc = result.unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon, "").is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(GeoLocation::new(lat, lon, "").is_err());
        }
    }
}

// ============================================================================
// Sidereal Transform Property Tests
// ============================================================================

mod sidereal_tests {
    use super::*;

    proptest! {
        #[test]
        fn right_ascension_always_in_range(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64,
            // 1900 to 2100
            secs in -2_208_988_800i64..4_102_444_800i64
        ) {
            let location = GeoLocation::new(lat, lon, "").unwrap();
            let instant = Utc.timestamp_opt(secs, 0).single().unwrap();
            let sky = to_sky_coordinate(&location, instant);

            prop_assert!(sky.right_ascension() >= 0.0);
            prop_assert!(sky.right_ascension() < 360.0);
        }

        #[test]
        fn declination_equals_latitude(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64,
            secs in 0i64..4_102_444_800i64
        ) {
            let location = GeoLocation::new(lat, lon, "").unwrap();
            let instant = Utc.timestamp_opt(secs, 0).single().unwrap();
            let sky = to_sky_coordinate(&location, instant);

            prop_assert_eq!(sky.declination().to_bits(), lat.to_bits());
        }
    }
}

// ============================================================================
// SkyCoordinate Property Tests
// ============================================================================

mod sky_coordinate_tests {
    use super::*;

    proptest! {
        #[test]
        fn separation_is_symmetric_and_bounded(
            ra1 in 0.0f64..360.0f64,
            dec1 in -90.0f64..=90.0f64,
            ra2 in 0.0f64..360.0f64,
            dec2 in -90.0f64..=90.0f64
        ) {
            let a = SkyCoordinate::new(ra1, dec1).unwrap();
            let b = SkyCoordinate::new(ra2, dec2).unwrap();
            let ab = a.angular_separation(&b);
            let ba = b.angular_separation(&a);

            prop_assert!((ab - ba).abs() < 1e-9);
            prop_assert!((0.0..=180.0 + 1e-9).contains(&ab));
        }

        #[test]
        fn any_finite_ra_normalizes(ra in -1.0e6f64..1.0e6f64, dec in -90.0f64..=90.0f64) {
            let coord = SkyCoordinate::new(ra, dec).unwrap();
            prop_assert!((0.0..360.0).contains(&coord.right_ascension()));
        }

        #[test]
        fn sexagesimal_parse_stays_in_range(
            h in 0u32..24,
            m in 0u32..60,
            s in 0.0f64..59.999,
            negative in any::<bool>(),
            d in 0u32..90,
            am in 0u32..60,
            asec in 0.0f64..59.99
        ) {
            let ra = format!("{h:02} {m:02} {s:06.3}");
            let sign = if negative { '-' } else { '+' };
            let dec = format!("{sign}{d:02} {am:02} {asec:05.2}");
            let coord = SkyCoordinate::from_sexagesimal(&ra, &dec).unwrap();

            prop_assert!((0.0..360.0).contains(&coord.right_ascension()));
            prop_assert!((-90.0..=90.0).contains(&coord.declination()));
        }
    }
}

// ============================================================================
// Timezone / ObjectType Property Tests
// ============================================================================

mod lookup_tests {
    use super::*;

    proptest! {
        #[test]
        fn any_label_maps_to_a_usable_zone(label in ".{0,40}") {
            let tz = Timezone::from_platform_label(Some(&label));
            // Must resolve to something chrono-tz understands, UTC at worst
            let _ = tz.tz();
            prop_assert!(!tz.as_str().is_empty());
        }

        #[test]
        fn lookup_never_panics(code in "\\PC{0,12}") {
            let _ = ObjectType::lookup(&code);
        }
    }
}
