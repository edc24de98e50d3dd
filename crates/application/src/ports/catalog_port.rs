//! Astronomical catalog port
//!
//! Cone searches against an object catalog that reports positions as
//! sexagesimal text.

use std::collections::BTreeMap;

use async_trait::async_trait;
use domain::SkyCoordinate;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// A cone search request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Cone centre
    pub coordinate: SkyCoordinate,
    /// Cone radius in degrees
    pub radius_degrees: f64,
    /// Auxiliary numeric fields to return with each row
    pub fields: Vec<String>,
}

/// One catalog entry as returned by the service
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogRow {
    /// Main identifier
    pub name: String,
    /// Object type name
    pub type_code: String,
    /// Right ascension, "HH MM SS.sss"
    pub ra_text: String,
    /// Declination, "+DD MM SS.ss"
    pub dec_text: String,
    /// Requested auxiliary fields that had a value
    #[serde(default)]
    pub fields: BTreeMap<String, f64>,
}

impl CatalogRow {
    /// Create a row without auxiliary fields
    pub fn new(
        name: impl Into<String>,
        type_code: impl Into<String>,
        ra_text: impl Into<String>,
        dec_text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_code: type_code.into(),
            ra_text: ra_text.into(),
            dec_text: dec_text.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder method to attach an auxiliary field
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>, value: f64) -> Self {
        self.fields.insert(field.into(), value);
        self
    }

    /// Value of an auxiliary field, if present
    #[must_use]
    pub fn field(&self, field: &str) -> Option<f64> {
        self.fields.get(field).copied()
    }
}

/// Port for catalog queries
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// All entries within the query cone; order is not significant
    async fn region_query(&self, query: &CatalogQuery)
    -> Result<Vec<CatalogRow>, ApplicationError>;
}
