//! Adapters implementing application ports over the integration crates

mod places_geocoding_adapter;
mod publishing_adapter;
mod simbad_catalog_adapter;
mod tagger_adapter;
mod twitter_social_adapter;

pub use places_geocoding_adapter::PlacesGeocodingAdapter;
pub use publishing_adapter::{BlogAdapter, CutoutImageAdapter};
pub use simbad_catalog_adapter::SimbadCatalogAdapter;
pub use tagger_adapter::TaggerAdapter;
pub use twitter_social_adapter::TwitterSocialAdapter;
