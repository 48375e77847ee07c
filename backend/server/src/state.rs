use std::sync::Arc;

use bank::{CatalogError, get_catalog, read_catalog, recipes::Catalog};
use tracing::info;

use super::config::Config;

pub struct AppState {
    pub catalog: Catalog,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog) -> Arc<Self> {
        Arc::new(Self { catalog, config })
    }

    /// Reads the configured catalog file, or falls back to the built-in recipes.
    pub fn load(config: Config) -> Result<Arc<Self>, CatalogError> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                info!("Loading catalog from {}", path.display());
                read_catalog(path)?
            }
            None => get_catalog(),
        };

        info!("Loaded recipes: {}", catalog.len());

        Ok(Self::new(config, catalog))
    }
}
