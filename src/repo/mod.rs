//! Sensor-reading storage.
//!
//! The in-memory backend is always compiled; Postgres needs the `db` feature.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::config::{StorageBackend, StorageConfig};
use crate::domain::{ReadingKind, SensorReading};

pub mod memory;
#[cfg(feature = "db")]
pub mod pg;

pub use memory::InMemoryReadingStore;
#[cfg(feature = "db")]
pub use pg::PgReadingStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("invalid stored row: {0}")]
    InvalidRow(String),

    #[cfg(feature = "db")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Append-only store of sensor readings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Persist readings, returning how many were written.
    async fn append(&self, readings: &[SensorReading]) -> Result<u64, StoreError>;

    /// All readings, oldest first.
    async fn list(&self) -> Result<Vec<SensorReading>, StoreError>;

    /// Arithmetic mean of every stored value of `kind`; `None` when there are none.
    async fn mean_value(&self, kind: ReadingKind) -> Result<Option<f64>, StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;

    fn backend(&self) -> &'static str;
}

/// Open the configured backend.
pub async fn connect(cfg: &StorageConfig) -> Result<Arc<dyn ReadingStore>> {
    match cfg.backend {
        StorageBackend::Memory => Ok(Arc::new(InMemoryReadingStore::new())),
        StorageBackend::Postgres => {
            #[cfg(feature = "db")]
            {
                Ok(Arc::new(PgReadingStore::connect(cfg).await?))
            }

            #[cfg(not(feature = "db"))]
            {
                anyhow::bail!("storage.backend = \"postgres\" requires building with the `db` feature")
            }
        }
    }
}
