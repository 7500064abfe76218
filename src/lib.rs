pub mod aggregator;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod db;
pub mod fallback;
pub mod favorites;
pub mod matching;
pub mod normalize;
pub mod sources;
pub mod storage;
pub mod telemetry;
pub mod translate;
pub mod types;

// --- Library API for embedding ---

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use crate::catalog::{BadgedRecord, CatalogStore, SearchOutcome};
    pub use crate::config::AppConfig;
    pub use crate::favorites::{Category, FavoriteEntry, FavoritesStore};
    pub use crate::types::{CatalogRecord, Domain, Extras, SourceKind};
    pub use crate::HallowTales;
}

use std::sync::Arc;

use anyhow::{anyhow, Result};

use crate::catalog::CatalogStore;
use crate::config::AppConfig;
use crate::db::Database;
use crate::favorites::FavoritesStore;
use crate::telemetry::TracingSink;

/// Async library entry point. Owns the catalogs and the favorites store.
pub struct HallowTales {
    config: AppConfig,
    catalog: CatalogStore,
    favorites: FavoritesStore,
}

impl HallowTales {
    /// Validate `config`, open the favorites database (migrating it), and wire the catalogs.
    pub async fn connect(config: AppConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|errors| anyhow!("invalid configuration: {}", errors.join("; ")))?;

        let db = Database::connect(config.favorites.database_url.as_deref()).await?;
        db.run_migrations().await?;
        let favorites = FavoritesStore::new(Arc::new(db)).with_sink(Arc::new(TracingSink));
        favorites.initialize().await?;

        let catalog = CatalogStore::from_config(&config)?;
        Ok(Self { config, catalog, favorites })
    }

    pub fn config(&self) -> &AppConfig { &self.config }
    pub fn catalog(&self) -> &CatalogStore { &self.catalog }
    pub fn favorites(&self) -> &FavoritesStore { &self.favorites }
}
