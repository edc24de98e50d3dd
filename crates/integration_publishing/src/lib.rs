//! Publishing integration for WhatsAboveMe
//!
//! Two small HTTP clients: [`CutoutClient`] fetches a JPEG of the sky around
//! a position from an image cutout service, and [`BlogClient`] publishes an
//! HTML article and returns its public link.

mod blog;
mod config;
mod cutout;
mod error;

pub use blog::{BlogClient, BlogPost, HttpBlogClient};
pub use config::PublishingConfig;
pub use cutout::{CutoutClient, CutoutRequest, HttpCutoutClient};
pub use error::PublishingError;
