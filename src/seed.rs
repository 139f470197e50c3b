//! Synthetic reading history for demo deployments.

use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;

use crate::config::SeedConfig;
use crate::domain::{ReadingKind, SensorReading};
use crate::repo::{ReadingStore, StoreError};

const ENERGY_MEAN_KWH: f64 = 850.0;
const ENERGY_SPREAD_KWH: f64 = 120.0;
const WATER_MEAN_L: f64 = 1200.0;
const WATER_SPREAD_L: f64 = 200.0;
/// Predicted values stay within ±5% of the actual reading.
const PREDICTION_ERROR: f64 = 0.05;

/// One actual and one predicted reading per kind for each of the `days`
/// calendar days ending at `last_day`, stamped at noon UTC.
pub fn generate_readings(days: u32, last_day: NaiveDate, rng_seed: u64) -> Vec<SensorReading> {
    let mut rng = StdRng::seed_from_u64(rng_seed);
    let mut readings = Vec::with_capacity(days as usize * 4);
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default();

    for offset in (0..days).rev() {
        let day = last_day - Duration::days(i64::from(offset));
        let timestamp = day.and_time(noon).and_utc();

        for (kind, mean, spread) in [
            (ReadingKind::Energy, ENERGY_MEAN_KWH, ENERGY_SPREAD_KWH),
            (ReadingKind::Water, WATER_MEAN_L, WATER_SPREAD_L),
        ] {
            let actual = mean + rng.gen_range(-spread..=spread);
            let predicted = actual * (1.0 + rng.gen_range(-PREDICTION_ERROR..=PREDICTION_ERROR));
            readings.push(SensorReading::actual(timestamp, kind, round2(actual)));
            readings.push(SensorReading::predicted(timestamp, kind, round2(predicted)));
        }
    }

    readings
}

/// Write a generated history unless the store already holds readings.
pub async fn seed_if_empty(store: &dyn ReadingStore, cfg: &SeedConfig) -> Result<u64, StoreError> {
    let existing = store.count().await?;
    if existing > 0 {
        info!(existing, "store already has readings, skipping seed");
        return Ok(0);
    }

    let readings = generate_readings(cfg.days, Utc::now().date_naive(), cfg.rng_seed);
    let written = store.append(&readings).await?;
    info!(written, days = cfg.days, backend = store.backend(), "seeded reading history");
    Ok(written)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
