//! Application state: the read-only catalog and the level registry.
//!
//! Both are injected; nothing here is global. Handlers get a cheap clone of
//! `Arc<AppState>` per request.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::catalog::{Catalog, CatalogError};
use crate::config::{load_catalog_file, ServiceConfig};
use crate::error::Result;
use crate::store::{LevelRegistry, LevelStore, PgLevelStore};

pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub registry: LevelRegistry,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, registry: LevelRegistry) -> Self {
        Self { catalog, registry }
    }

    /// Build state from configuration: catalog file or built-in levels, and a
    /// Postgres registry when `DATABASE_URL` is set.
    #[instrument(level = "info", skip_all)]
    pub fn from_config(cfg: &ServiceConfig) -> std::result::Result<Self, StartupError> {
        let catalog = match cfg.catalog_path.as_deref().and_then(load_catalog_file) {
            Some(c) => c,
            None => {
                if cfg.catalog_path.is_some() {
                    warn!(target: "levels_backend", "Falling back to built-in catalog");
                }
                Catalog::builtin()?
            }
        };
        info!(target: "levels_backend", levels = catalog.len(), "Catalog ready");

        let registry = match &cfg.database_url {
            Some(url) => {
                let store = PgLevelStore::connect_lazy(url, cfg.db_timeout)?;
                info!(target: "levels_backend", timeout_ms = cfg.db_timeout.as_millis() as u64, "Database configured");
                LevelRegistry::new(Some(Arc::new(store) as Arc<dyn LevelStore>))
            }
            None => {
                warn!(target: "levels_backend", "DATABASE_URL not set; level listing and seeding are disabled");
                LevelRegistry::unconfigured()
            }
        };

        Ok(Self::new(Arc::new(catalog), registry))
    }

    /// Seed the registry with the catalog's canonical rows.
    pub async fn seed(&self) -> Result<u64> {
        self.registry.ensure_schema_and_seed(&self.catalog.level_records()).await
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Storage(#[from] crate::error::AppError),
}
