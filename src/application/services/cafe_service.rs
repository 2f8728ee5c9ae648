//! Cafe Service
//!
//! Resolves café lookups against the shared catalog.

use std::sync::Arc;

use crate::domain::{render, CafeQuery, Catalog, QueryError};

/// Cafe service trait
pub trait CafeService: Send + Sync {
    /// Validate raw query pairs and return the selected café names
    fn find_cafes(&self, params: &[(String, String)]) -> Result<CafeListDto, QueryError>;

    /// Number of cities the service can answer for
    fn city_count(&self) -> usize;
}

/// Selected cafés, in catalog order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeListDto {
    pub cafes: Vec<String>,
}

impl CafeListDto {
    /// Comma-joined body; empty for zero cafés
    pub fn render(&self) -> String {
        render(&self.cafes)
    }
}

/// CafeService implementation backed by an in-memory catalog
#[derive(Debug, Clone)]
pub struct CafeServiceImpl {
    catalog: Arc<Catalog>,
}

impl CafeServiceImpl {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl CafeService for CafeServiceImpl {
    fn find_cafes(&self, params: &[(String, String)]) -> Result<CafeListDto, QueryError> {
        let query = CafeQuery::from_params(params, &self.catalog).inspect_err(|e| {
            tracing::debug!(error = %e, "Rejected cafe query");
        })?;

        let cafes: Vec<String> = query.select().into_iter().map(str::to_string).collect();

        tracing::debug!(
            city = query.city,
            count = ?query.count,
            search = ?query.search,
            found = cafes.len(),
            "Cafe query resolved"
        );

        Ok(CafeListDto { cafes })
    }

    fn city_count(&self) -> usize {
        self.catalog.len()
    }
}
