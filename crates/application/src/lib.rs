//! Application layer - Use cases and orchestration
//!
//! Contains the sky-reply pipeline (classification, resolution, matching,
//! reply composition) and the port definitions it drives. Adapters in the
//! infrastructure layer implement the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
