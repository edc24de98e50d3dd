//! Catalogued astronomical object

use serde::{Deserialize, Serialize};

use super::ObjectType;
use crate::value_objects::SkyCoordinate;

/// The catalog object chosen as nearest to a sky position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialObject {
    /// Main catalog identifier, e.g. "M 31"
    pub name: String,
    /// Catalog object type, long name or condensed code
    pub type_code: String,
    /// Position parsed from the catalog's sexagesimal fields
    pub coordinate: SkyCoordinate,
    /// Spectroscopic redshift, or radial velocity over c
    pub redshift: Option<f64>,
    /// Apparent magnitude in the first available photometric band
    pub magnitude: Option<f64>,
}

impl CelestialObject {
    /// Create an object without auxiliary attributes
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        type_code: impl Into<String>,
        coordinate: SkyCoordinate,
    ) -> Self {
        Self {
            name: name.into(),
            type_code: type_code.into(),
            coordinate,
            redshift: None,
            magnitude: None,
        }
    }

    /// Builder method to attach a redshift
    #[must_use]
    pub const fn with_redshift(mut self, redshift: Option<f64>) -> Self {
        self.redshift = redshift;
        self
    }

    /// Builder method to attach a magnitude
    #[must_use]
    pub const fn with_magnitude(mut self, magnitude: Option<f64>) -> Self {
        self.magnitude = magnitude;
        self
    }

    /// Resolve the type code against the object-type vocabulary
    #[must_use]
    pub fn object_type(&self) -> Option<&'static ObjectType> {
        ObjectType::lookup(&self.type_code)
    }

    /// Reply phrase for the type ("a galaxy"), absent for unknown types
    #[must_use]
    pub fn type_description(&self) -> Option<&'static str> {
        self.object_type()
            .filter(|t| !t.is_unknown())
            .map(|t| t.description)
    }
}
