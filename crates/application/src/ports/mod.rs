//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod blog_port;
mod catalog_port;
mod geocoding_port;
mod image_port;
mod social_port;
mod tagger_port;

#[cfg(test)]
pub use blog_port::MockBlogPort;
pub use blog_port::{Article, BlogPort};
#[cfg(test)]
pub use catalog_port::MockCatalogPort;
pub use catalog_port::{CatalogPort, CatalogQuery, CatalogRow};
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::{GeocodingPort, PlaceCandidate, PlaceDetails};
pub use image_port::ImagePort;
#[cfg(test)]
pub use image_port::MockImagePort;
#[cfg(test)]
pub use social_port::MockSocialPort;
pub use social_port::{InboundRecord, InboundStream, OutgoingReply, SocialPort};
#[cfg(test)]
pub use tagger_port::MockTaggerPort;
pub use tagger_port::{LOCATION_TAG_SUFFIXES, TaggedToken, TaggerPort};
