//! Persistence - document store backends
//!
//! `memory` keeps everything in process; `sqlite` persists to the database at
//! `DATABASE_URL`. Both fan change notifications out to listeners in process.

mod in_memory_store;
mod sqlite_document_store;

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;

use crate::application::ports::outbound::DocumentStorePort;
use crate::infrastructure::config::{AppConfig, StoreBackend};

pub use in_memory_store::InMemoryDocumentStore;
pub use sqlite_document_store::SqliteDocumentStore;

/// Create the document store selected by configuration
pub async fn create_document_store(config: &AppConfig) -> Result<Arc<dyn DocumentStorePort>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory document store");
            Ok(Arc::new(InMemoryDocumentStore::new(
                config.room_data_channel_capacity,
            )))
        }
        StoreBackend::Sqlite => {
            let pool = SqlitePoolOptions::new()
                .connect(&config.database_url)
                .await
                .context("Failed to connect to SQLite document database")?;
            tracing::info!("Connected to SQLite document database: {}", config.database_url);

            let store = SqliteDocumentStore::new(pool, config.room_data_channel_capacity)
                .await
                .context("Failed to initialize documents table")?;
            Ok(Arc::new(store))
        }
    }
}
