//! This module defines the shared data structures used throughout the
//! application. The bot binary stores an `Arc<AppState>` in its global
//! context and hands it to command handlers.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::arcana::catalog::ArcanaCatalog;
use crate::database;
use crate::database::init::DbPool;

/// The central, shared state of the application.
pub struct AppState {
    /// The connection pool for the PostgreSQL database.
    pub db: DbPool,
    /// The current arcana catalog snapshot. Swapped wholesale on reload;
    /// readers clone the `Arc` and keep using the snapshot they started with.
    catalog: RwLock<Arc<ArcanaCatalog>>,
}

impl AppState {
    /// Connects the state to a pool and performs the initial catalog load.
    pub async fn new(db: DbPool) -> Result<Self, sqlx::Error> {
        let catalog = database::arcana::load_catalog(&db).await?;
        Ok(Self {
            db,
            catalog: RwLock::new(Arc::new(catalog)),
        })
    }

    /// The current catalog snapshot.
    pub async fn catalog(&self) -> Arc<ArcanaCatalog> {
        self.catalog.read().await.clone()
    }

    /// Rebuilds the catalog from the database and swaps it in. The new
    /// snapshot is fully built before the reference is replaced, so draws in
    /// flight never observe a partial catalog. Triggered on startup and by
    /// explicit admin action.
    pub async fn reload_catalog(&self) -> Result<(), sqlx::Error> {
        let fresh = database::arcana::load_catalog(&self.db).await?;
        *self.catalog.write().await = Arc::new(fresh);
        info!("arcana catalog reloaded");
        Ok(())
    }
}
