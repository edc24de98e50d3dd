//! Domain layer for WhatsAboveMe
//!
//! Contains the sky-reply vocabulary: classified intents, geographic and
//! celestial coordinates, catalogued objects, and the sidereal transform.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod sidereal;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use sidereal::to_sky_coordinate;
pub use value_objects::*;
