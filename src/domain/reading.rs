use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// What a sensor measured
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReadingKind {
    /// Electrical consumption in kWh
    Energy,
    /// Water consumption in litres
    Water,
}

/// A single time-series sample.
///
/// Readings are append-only. `id` is assigned by the store on insert and is
/// `None` for readings that have not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorReading {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub timestamp: DateTime<Utc>,
    pub kind: ReadingKind,
    pub value: f64,
    pub is_predicted: bool,
}

impl SensorReading {
    pub fn new(timestamp: DateTime<Utc>, kind: ReadingKind, value: f64, is_predicted: bool) -> Self {
        Self {
            id: None,
            timestamp,
            kind,
            value,
            is_predicted,
        }
    }

    pub fn actual(timestamp: DateTime<Utc>, kind: ReadingKind, value: f64) -> Self {
        Self::new(timestamp, kind, value, false)
    }

    pub fn predicted(timestamp: DateTime<Utc>, kind: ReadingKind, value: f64) -> Self {
        Self::new(timestamp, kind, value, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn kind_round_trips_through_text() {
        assert_eq!(ReadingKind::Energy.to_string(), "energy");
        assert_eq!(ReadingKind::from_str("water").unwrap(), ReadingKind::Water);
        assert!(ReadingKind::from_str("gas").is_err());
    }

    #[test]
    fn unsaved_reading_omits_id() {
        let reading = SensorReading::predicted(Utc::now(), ReadingKind::Energy, 812.5);
        let json = serde_json::to_value(&reading).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["kind"], "energy");
        assert_eq!(json["isPredicted"], true);
    }
}
