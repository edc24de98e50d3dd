//! Domain entities - Per-message objects produced and consumed by the pipeline

mod celestial_object;
mod intent;
mod object_type;

pub use celestial_object::CelestialObject;
pub use intent::{Intent, MessageContext};
pub use object_type::ObjectType;
