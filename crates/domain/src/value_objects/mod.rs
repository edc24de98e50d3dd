//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod sky_coordinate;
mod timezone;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use sky_coordinate::SkyCoordinate;
pub(crate) use sky_coordinate::normalize_degrees;
pub use timezone::Timezone;
