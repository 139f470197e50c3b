#![cfg(feature = "db")]

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use tracing::{info, warn};

use super::{ReadingStore, StoreError};
use crate::config::StorageConfig;
use crate::domain::{ReadingKind, SensorReading};

const SCHEMA: &str = include_str!("../../migrations/0001_sensor_readings.sql");

#[derive(Debug, sqlx::FromRow)]
struct ReadingRow {
    id: i64,
    timestamp: DateTime<Utc>,
    kind: String,
    value: f64,
    is_predicted: bool,
}

impl TryFrom<ReadingRow> for SensorReading {
    type Error = StoreError;

    fn try_from(row: ReadingRow) -> Result<Self, Self::Error> {
        let kind: ReadingKind = row
            .kind
            .parse()
            .map_err(|_| StoreError::InvalidRow(format!("reading {} has kind {:?}", row.id, row.kind)))?;
        Ok(SensorReading {
            id: Some(row.id),
            timestamp: row.timestamp,
            kind,
            value: row.value,
            is_predicted: row.is_predicted,
        })
    }
}

/// `sensor_readings` table in Postgres.
pub struct PgReadingStore {
    pool: PgPool,
}

impl PgReadingStore {
    /// Connect with retry and make sure the schema exists.
    pub async fn connect(cfg: &StorageConfig) -> Result<Self> {
        info!(max_connections = cfg.max_connections, "connecting to postgres");
        let pool = connect_with_retry(cfg).await?;

        sqlx::raw_sql(SCHEMA)
            .execute(&pool)
            .await
            .context("failed to apply sensor_readings schema")?;

        info!("postgres reading store ready");
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

async fn connect_with_retry(cfg: &StorageConfig) -> Result<PgPool> {
    let max_attempts = cfg.connect_attempts.max(1);
    let mut attempt = 0;
    let mut delay = Duration::from_secs(1);

    loop {
        attempt += 1;
        let result = PgPoolOptions::new()
            .max_connections(cfg.max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .connect(&cfg.url)
            .await;

        match result {
            Ok(pool) => return Ok(pool),
            Err(e) if attempt >= max_attempts => {
                return Err(e).context(format!(
                    "failed to connect to postgres after {} attempts",
                    max_attempts
                ));
            }
            Err(e) => {
                warn!(
                    attempt,
                    max_attempts,
                    error = %e,
                    retry_in_ms = delay.as_millis() as u64,
                    "postgres connection attempt failed"
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
        }
    }
}

#[async_trait]
impl ReadingStore for PgReadingStore {
    async fn append(&self, readings: &[SensorReading]) -> Result<u64, StoreError> {
        let mut tx = self.pool.begin().await?;
        for reading in readings {
            sqlx::query(
                r#"
                INSERT INTO sensor_readings (timestamp, kind, value, is_predicted)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(reading.timestamp)
            .bind(reading.kind.to_string())
            .bind(reading.value)
            .bind(reading.is_predicted)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(readings.len() as u64)
    }

    async fn list(&self) -> Result<Vec<SensorReading>, StoreError> {
        let rows = sqlx::query_as::<_, ReadingRow>(
            r#"
            SELECT id, timestamp, kind, value, is_predicted
            FROM sensor_readings
            ORDER BY timestamp ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(SensorReading::try_from).collect()
    }

    async fn mean_value(&self, kind: ReadingKind) -> Result<Option<f64>, StoreError> {
        let mean = sqlx::query_scalar::<_, Option<f64>>(
            "SELECT AVG(value) FROM sensor_readings WHERE kind = $1",
        )
        .bind(kind.to_string())
        .fetch_one(&self.pool)
        .await?;
        Ok(mean)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sensor_readings")
            .fetch_one(&self.pool)
            .await?;
        Ok(n.max(0) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
