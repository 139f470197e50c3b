//! Daily chart series for the dashboard.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::{ReadingKind, SensorReading};

/// One day of chart data. Slots with no readings are `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPoint {
    /// `YYYY-MM-DD`
    pub time: String,
    pub actual_energy: Option<f64>,
    pub predicted_energy: Option<f64>,
    pub actual_water: Option<f64>,
    pub predicted_water: Option<f64>,
}

#[derive(Default)]
struct DaySlots {
    actual_energy: Option<f64>,
    predicted_energy: Option<f64>,
    actual_water: Option<f64>,
    predicted_water: Option<f64>,
}

impl DaySlots {
    fn slot(&mut self, reading: &SensorReading) -> &mut Option<f64> {
        match (reading.kind, reading.is_predicted) {
            (ReadingKind::Energy, false) => &mut self.actual_energy,
            (ReadingKind::Energy, true) => &mut self.predicted_energy,
            (ReadingKind::Water, false) => &mut self.actual_water,
            (ReadingKind::Water, true) => &mut self.predicted_water,
        }
    }
}

/// Group readings by UTC calendar day, summing values per kind and
/// actual/predicted. Days come out oldest first.
pub fn daily_series(readings: &[SensorReading]) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, DaySlots> = BTreeMap::new();

    for reading in readings {
        let slot = days
            .entry(reading.timestamp.date_naive())
            .or_default()
            .slot(reading);
        *slot = Some(slot.unwrap_or(0.0) + reading.value);
    }

    days.into_iter()
        .map(|(day, slots)| DailyPoint {
            time: day.format("%Y-%m-%d").to_string(),
            actual_energy: slots.actual_energy.map(round2),
            predicted_energy: slots.predicted_energy.map(round2),
            actual_water: slots.actual_water.map(round2),
            predicted_water: slots.predicted_water.map(round2),
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
