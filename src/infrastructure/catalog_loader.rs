//! Catalog Loader
//!
//! Builds the startup catalog either from the bundled data set or from a
//! JSON file mapping each city key to an array of café names:
//!
//! ```json
//! { "moscow": ["Мир кофе", "Сладкоежка"], "tula": ["Дом кофе"] }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::CatalogSettings;
use crate::domain::Catalog;

/// Errors raised while loading the catalog at startup
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the catalog described by the settings
pub fn load_catalog(settings: &CatalogSettings) -> Result<Catalog, CatalogLoadError> {
    match settings.path.as_deref() {
        Some(path) => load_from_file(Path::new(path)),
        None => {
            tracing::info!("No catalog path configured, using built-in catalog");
            Ok(Catalog::builtin())
        }
    }
}

/// Read a JSON catalog file
pub fn load_from_file(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&raw).map_err(|source| CatalogLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), cities = catalog.len(), "Catalog loaded from file");
    Ok(catalog)
}

/// Parse the JSON catalog format
pub fn parse_catalog(raw: &str) -> Result<Catalog, serde_json::Error> {
    let cities: HashMap<String, Vec<String>> = serde_json::from_str(raw)?;
    Ok(Catalog::from(cities))
}
