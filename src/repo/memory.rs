use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use tokio::sync::RwLock;

use super::{ReadingStore, StoreError};
use crate::domain::{ReadingKind, SensorReading};

/// Process-local store used for demos and tests.
pub struct InMemoryReadingStore {
    readings: RwLock<Vec<SensorReading>>,
    next_id: AtomicI64,
    available: AtomicBool,
}

impl InMemoryReadingStore {
    pub fn new() -> Self {
        Self {
            readings: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
            available: AtomicBool::new(true),
        }
    }

    /// Simulate an outage: every operation fails with `Unavailable` until re-enabled.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("in-memory store is offline".to_string()))
        }
    }
}

impl Default for InMemoryReadingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadingStore for InMemoryReadingStore {
    async fn append(&self, readings: &[SensorReading]) -> Result<u64, StoreError> {
        self.check_available()?;
        let mut stored = self.readings.write().await;
        for reading in readings {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            stored.push(SensorReading {
                id: Some(id),
                ..reading.clone()
            });
        }
        Ok(readings.len() as u64)
    }

    async fn list(&self) -> Result<Vec<SensorReading>, StoreError> {
        self.check_available()?;
        let mut readings = self.readings.read().await.clone();
        readings.sort_by_key(|r| (r.timestamp, r.id));
        Ok(readings)
    }

    async fn mean_value(&self, kind: ReadingKind) -> Result<Option<f64>, StoreError> {
        self.check_available()?;
        let readings = self.readings.read().await;
        let (sum, n) = readings
            .iter()
            .filter(|r| r.kind == kind)
            .fold((0.0, 0usize), |(sum, n), r| (sum + r.value, n + 1));
        Ok((n > 0).then(|| sum / n as f64))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.check_available()?;
        Ok(self.readings.read().await.len() as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn at(hours: i64) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap() + Duration::hours(hours)
    }

    #[tokio::test]
    async fn append_assigns_ids_and_lists_oldest_first() {
        let store = InMemoryReadingStore::new();
        store
            .append(&[
                SensorReading::actual(at(5), ReadingKind::Energy, 800.0),
                SensorReading::actual(at(1), ReadingKind::Water, 1200.0),
            ])
            .await
            .unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].kind, ReadingKind::Water);
        assert_eq!(listed[0].id, Some(2));
        assert_eq!(listed[1].id, Some(1));
    }

    #[tokio::test]
    async fn mean_only_counts_requested_kind() {
        let store = InMemoryReadingStore::new();
        assert_eq!(store.mean_value(ReadingKind::Energy).await.unwrap(), None);

        store
            .append(&[
                SensorReading::actual(at(0), ReadingKind::Energy, 800.0),
                SensorReading::predicted(at(0), ReadingKind::Energy, 900.0),
                SensorReading::actual(at(0), ReadingKind::Water, 5000.0),
            ])
            .await
            .unwrap();

        assert_eq!(store.mean_value(ReadingKind::Energy).await.unwrap(), Some(850.0));
        assert_eq!(store.mean_value(ReadingKind::Water).await.unwrap(), Some(5000.0));
    }

    #[tokio::test]
    async fn offline_store_rejects_everything() {
        let store = InMemoryReadingStore::new();
        store.set_available(false);
        assert!(matches!(store.ping().await, Err(StoreError::Unavailable(_))));
        assert!(store.mean_value(ReadingKind::Energy).await.is_err());
        assert!(store.append(&[]).await.is_err());

        store.set_available(true);
        assert!(store.ping().await.is_ok());
    }
}
