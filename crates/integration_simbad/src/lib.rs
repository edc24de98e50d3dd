//! SIMBAD catalog integration for WhatsAboveMe
//!
//! Runs cone searches against the SIMBAD script interface. Each query
//! requests a fixed set of position columns followed by caller-chosen
//! logical fields ("redshift", "radial_velocity", "flux_V", ...), which are
//! translated into SIMBAD format specifiers.

mod client;
mod config;
mod error;
mod script;

pub use client::{CatalogClient, SimbadClient};
pub use config::SimbadConfig;
pub use error::SimbadError;
pub use script::{ConeSearch, ScriptRow, build_script, field_specifier, parse_output};
