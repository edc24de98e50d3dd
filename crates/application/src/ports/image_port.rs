//! Sky image port

use async_trait::async_trait;
use domain::CelestialObject;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for fetching a sky cutout around an object
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImagePort: Send + Sync {
    /// JPEG bytes centred on the object
    async fn fetch_image(&self, object: &CelestialObject) -> Result<Vec<u8>, ApplicationError>;
}
