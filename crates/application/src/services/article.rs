//! Article composer - Blog post describing the object found for a reply

use chrono::DateTime;
use chrono_tz::Tz;
use domain::{CelestialObject, GeoLocation, SkyCoordinate};

use crate::ports::Article;

/// Hubble constant, km/s/Mpc (WMAP nine-year)
pub const HUBBLE_CONSTANT: f64 = 69.32;

/// Matter density parameter (WMAP nine-year)
pub const OMEGA_MATTER: f64 = 0.2865;

/// Light years per megaparsec
pub const LIGHT_YEARS_PER_MPC: f64 = 3.261_563_777e6;

const SPEED_OF_LIGHT_KM_S: f64 = 299_792.458;

/// Simpson intervals for the distance integral; must be even
const INTEGRATION_STEPS: usize = 1000;

/// Visibility thresholds, brightest first
const VISIBILITY: [(f64, &str); 4] = [
    (3.0, "which means it can be seen quite easily with the naked eye."),
    (6.0, "which means it can be seen with the naked eye on a dark night."),
    (9.5, "which means it can be seen with a good pair of binoculars."),
    (13.0, "which means it can be seen with a good telescope."),
];

const TOO_FAINT: &str =
    "which means it is too faint to be seen without a professional-quality telescope.";

/// Comoving distance in light years for `redshift`, flat ΛCDM
///
/// Non-positive redshifts give zero.
#[must_use]
pub fn comoving_distance_light_years(redshift: f64) -> f64 {
    if !redshift.is_finite() || redshift <= 0.0 {
        return 0.0;
    }

    let omega_lambda = 1.0 - OMEGA_MATTER;
    let inverse_e = |z: f64| 1.0 / OMEGA_MATTER.mul_add((1.0 + z).powi(3), omega_lambda).sqrt();

    let h = redshift / INTEGRATION_STEPS as f64;
    let mut sum = inverse_e(0.0) + inverse_e(redshift);
    for i in 1..INTEGRATION_STEPS {
        let weight = if i % 2 == 0 { 2.0 } else { 4.0 };
        sum += weight * inverse_e(i as f64 * h);
    }
    let integral = sum * h / 3.0;

    let hubble_distance_mpc = SPEED_OF_LIGHT_KM_S / HUBBLE_CONSTANT;
    hubble_distance_mpc * integral * LIGHT_YEARS_PER_MPC
}

/// Round `x` to `n` significant figures
#[must_use]
pub fn round_to_n(x: f64, n: i32) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    #[allow(clippy::cast_possible_truncation)]
    let magnitude = x.abs().log10().floor() as i32;
    let scale = 10f64.powi(n - 1 - magnitude);
    (x * scale).round() / scale
}

/// Present a positive number with a scale word ("13 billion", "850 million")
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn wordify_number(number: f64) -> String {
    const NAMED: [(f64, &str); 4] = [
        (1.0, ""),
        (1e6, " million"),
        (1e9, " billion"),
        (1e12, " trillion"),
    ];

    if number < 10.0 {
        return format!("{}", number.round() as i64);
    }

    let rounded = round_to_n(number, 2);
    match NAMED.iter().position(|(denominator, _)| *denominator > rounded) {
        Some(idx) => {
            let (denominator, name) = NAMED[idx.saturating_sub(1)];
            let factor = round_to_n(number / denominator, 2) as i64;
            format!("{factor}{name}")
        },
        None => {
            let (denominator, name) = NAMED[NAMED.len() - 1];
            format!("{}{name}", wordify_number(number / denominator))
        },
    }
}

/// Type-specific introduction paragraph
fn type_paragraph(object: &CelestialObject) -> String {
    let Some(object_type) = object.object_type() else {
        return String::new();
    };

    match object_type.name {
        "Star" => "<p>There are around 300 billion stars in our galaxy, the Milky Way. \
                   In general, the most massive stars are the most luminous, but they also \
                   live for a shorter time. How bright a star appears from Earth also depends \
                   on how close to us it is.</p>"
            .to_string(),
        "IR" => {
            let mut text = String::from(
                "<p>We don't know much about this object except that it emits plenty of \
                 infrared light. It might be a small, cool star or a distant galaxy.",
            );
            if object.magnitude.is_none() {
                text.push_str(
                    " Because it's fainter in visible light than in the infrared, you might \
                     not be able to see anything in the image.",
                );
            }
            text.push_str("</p>");
            text
        },
        "Galaxy" => {
            let mut text = String::from(
                "<p>Galaxies can contain hundreds of billions of stars, or sometimes even \
                 more. Because they are so far away, we normally can't see the individual \
                 stars. Instead we see the total light from all of them together.",
            );
            if let Some(z) = object.redshift.filter(|z| *z > 0.0) {
                text.push_str(&format!(
                    " This particular galaxy has been measured to be about {} light years away.",
                    wordify_number(comoving_distance_light_years(z))
                ));
            }
            text.push_str("</p>");
            text
        },
        _ => String::new(),
    }
}

/// Magnitude visibility paragraph, empty when no magnitude is known
fn magnitude_paragraph(object: &CelestialObject) -> String {
    let Some(magnitude) = object.magnitude else {
        return String::new();
    };
    let verdict = VISIBILITY
        .iter()
        .find(|(limit, _)| magnitude < *limit)
        .map_or(TOO_FAINT, |(_, text)| text);

    format!(
        "<p>{} has a magnitude of {magnitude}, {verdict}</p>",
        object.name
    )
}

/// Compose the blog article for one reply
#[must_use]
pub fn compose_article(
    object: &CelestialObject,
    location: &GeoLocation,
    zenith: SkyCoordinate,
    local_time: DateTime<Tz>,
) -> Article {
    let place = if location.description().is_empty() {
        location.to_string()
    } else {
        location.description().to_string()
    };

    let heading = object.object_type().map_or_else(
        || object.name.clone(),
        |t| format!("{} ({})", object.name, t.explanation),
    );

    let header = format!(
        "<p>Above {place} at {}, the zenith was at RA {:.3}°, Dec {:+.3}° \
         ({}). The nearest catalogued object is {heading}.</p>",
        local_time.format("%H:%M %Z on %-d %B %Y"),
        zenith.right_ascension(),
        zenith.declination(),
        zenith.to_sexagesimal(),
    );

    let mut body_html = header;
    body_html.push_str(&type_paragraph(object));
    body_html.push_str(&magnitude_paragraph(object));

    let mut tags = vec![place.clone()];
    if let Some(t) = object.object_type() {
        tags.push(t.name.to_string());
    }

    Article {
        title: format!("{} above {place}", object.name),
        body_html,
        tags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn object(type_code: &str) -> CelestialObject {
        CelestialObject::new("NGC 1", type_code, SkyCoordinate::new(1.0, 27.7).unwrap())
    }

    fn paris() -> GeoLocation {
        GeoLocation::new(48.8566, 2.3522, "Paris, France").unwrap()
    }

    fn local_time() -> DateTime<Tz> {
        Utc.with_ymd_and_hms(2014, 11, 8, 21, 30, 0)
            .unwrap()
            .with_timezone(&chrono_tz::Europe::Paris)
    }

    #[test]
    fn round_to_significant_figures() {
        assert!((round_to_n(12_345.0, 2) - 12_000.0).abs() < 1e-9);
        assert!((round_to_n(0.012_34, 2) - 0.012).abs() < 1e-12);
        assert!((round_to_n(987.0, 1) - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn wordify() {
        assert_eq!(wordify_number(7.2), "7");
        assert_eq!(wordify_number(12_345.0), "12000");
        assert_eq!(wordify_number(850_400_000.0), "850 million");
        assert_eq!(wordify_number(13.2e9), "13 billion");
        assert_eq!(wordify_number(2.5e13), "25 trillion");
    }

    #[test]
    fn distance_zero_for_blueshift() {
        assert!(comoving_distance_light_years(-0.001).abs() < f64::EPSILON);
        assert!(comoving_distance_light_years(0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_matches_hubble_law_at_low_redshift() {
        // cz/H0 for z = 0.001 is about 14.1 million light years
        let d = comoving_distance_light_years(0.001);
        assert!((d / 1e6 - 14.1).abs() < 0.1, "got {d}");
    }

    #[test]
    fn distance_at_redshift_one() {
        // About 3.4 Gpc comoving for WMAP9 parameters
        let d = comoving_distance_light_years(1.0);
        let gly = d / 1e9;
        assert!((10.5..11.5).contains(&gly), "got {gly}");
    }

    #[test]
    fn star_article() {
        let star = object("Star").with_magnitude(Some(2.1));
        let article = compose_article(&star, &paris(), star.coordinate, local_time());

        assert_eq!(article.title, "NGC 1 above Paris, France");
        assert!(article.body_html.contains("300 billion stars"));
        assert!(article.body_html.contains("magnitude of 2.1, which means it can be seen quite easily"));
        assert!(article.body_html.contains("22:30 CET on 8 November 2014"));
        assert_eq!(article.tags, vec!["Paris, France".to_string(), "Star".to_string()]);
    }

    #[test]
    fn infrared_article_notes_missing_magnitude() {
        let ir = object("IR");
        let article = compose_article(&ir, &paris(), ir.coordinate, local_time());
        assert!(article.body_html.contains("might not be able to see anything"));
        assert!(!article.body_html.contains("has a magnitude"));
    }

    #[test]
    fn galaxy_article_includes_distance() {
        let galaxy = object("Galaxy").with_redshift(Some(0.001)).with_magnitude(Some(14.0));
        let article = compose_article(&galaxy, &paris(), galaxy.coordinate, local_time());
        assert!(article.body_html.contains("about 14 million light years away"));
        assert!(article.body_html.contains("professional-quality telescope"));
    }

    #[test]
    fn visibility_thresholds() {
        let cases = [
            (5.9, "dark night"),
            (6.0, "binoculars"),
            (9.4, "binoculars"),
            (12.9, "good telescope"),
            (13.0, "professional-quality"),
        ];
        for (mag, expected) in cases {
            let text = magnitude_paragraph(&object("Star").with_magnitude(Some(mag)));
            assert!(text.contains(expected), "{mag}: {text}");
        }
    }

    #[test]
    fn other_types_have_no_intro() {
        assert!(type_paragraph(&object("QSO")).is_empty());
        assert!(type_paragraph(&object("NoSuchType")).is_empty());
    }
}
