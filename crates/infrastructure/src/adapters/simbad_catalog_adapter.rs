//! Catalog adapter - Implements CatalogPort using integration_simbad

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{CatalogPort, CatalogQuery, CatalogRow};
use async_trait::async_trait;
use integration_simbad::{CatalogClient, ConeSearch, ScriptRow, SimbadClient, SimbadConfig, SimbadError};
use tracing::{debug, instrument};

/// Adapter for the astronomical catalog
pub struct SimbadCatalogAdapter {
    client: Arc<dyn CatalogClient>,
    max_rows: u32,
}

impl std::fmt::Debug for SimbadCatalogAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimbadCatalogAdapter")
            .field("client", &"CatalogClient")
            .field("max_rows", &self.max_rows)
            .finish()
    }
}

impl SimbadCatalogAdapter {
    /// Create an adapter over the HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &SimbadConfig) -> Result<Self, ApplicationError> {
        config.validate().map_err(ApplicationError::Configuration)?;
        let client = SimbadClient::new(config).map_err(Self::map_error)?;
        Ok(Self::with_client(Arc::new(client), config.max_rows))
    }

    /// Create an adapter over any catalog client
    pub fn with_client(client: Arc<dyn CatalogClient>, max_rows: u32) -> Self {
        Self { client, max_rows }
    }

    /// Map integration catalog error to application error
    fn map_error(err: SimbadError) -> ApplicationError {
        match err {
            SimbadError::UnsupportedField(field) => {
                ApplicationError::Configuration(format!("unsupported catalog field: {field}"))
            },
            other => ApplicationError::ExternalService(format!("catalog: {other}")),
        }
    }

    fn map_row(row: ScriptRow) -> CatalogRow {
        CatalogRow {
            name: row.name,
            type_code: row.type_code,
            ra_text: row.ra_text,
            dec_text: row.dec_text,
            fields: row.fields,
        }
    }
}

#[async_trait]
impl CatalogPort for SimbadCatalogAdapter {
    #[instrument(skip(self, query), fields(coordinate = %query.coordinate, radius = query.radius_degrees))]
    async fn region_query(
        &self,
        query: &CatalogQuery,
    ) -> Result<Vec<CatalogRow>, ApplicationError> {
        let search = ConeSearch {
            ra_degrees: query.coordinate.right_ascension(),
            dec_degrees: query.coordinate.declination(),
            radius_degrees: query.radius_degrees,
            fields: query.fields.clone(),
            max_rows: self.max_rows,
        };

        let rows = self
            .client
            .cone_search(&search)
            .await
            .map_err(Self::map_error)?;
        debug!(count = rows.len(), "Catalog rows returned");

        Ok(rows.into_iter().map(Self::map_row).collect())
    }
}
