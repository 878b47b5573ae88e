use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weather quantity tracked by the beliefs dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sensor {
    Temperature,
    WindSpeed,
    Irradiance,
}

impl Sensor {
    /// Parse the dataset's `sensor` column.
    ///
    /// Returns `None` for sensors the service does not track.
    pub fn from_dataset_name(name: &str) -> Option<Self> {
        match name {
            "temperature" => Some(Self::Temperature),
            "wind_speed" => Some(Self::WindSpeed),
            "irradiance" => Some(Self::Irradiance),
            _ => None,
        }
    }

    /// Dataset column value for this sensor
    pub fn name(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::WindSpeed => "wind_speed",
            Self::Irradiance => "irradiance",
        }
    }
}

/// A single forecast belief: the value expected for `event_start`,
/// known since `belief_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Belief {
    pub sensor: Sensor,
    pub event_start: DateTime<Utc>,
    pub belief_time: DateTime<Utc>,
    pub value: f64,
}

/// Most recent forecast per sensor for a single target time.
///
/// Sensors with no matching belief serialize as `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Forecast {
    pub temperature: Option<f64>,
    pub wind_speed: Option<f64>,
    pub irradiance: Option<f64>,
}

/// Boolean indicators for the day after the knowledge time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomorrowConditions {
    pub warm: bool,
    pub sunny: bool,
    pub windy: bool,
}

/// Per-sensor cutoffs used to derive [`TomorrowConditions`].
///
/// Computed as the 75th percentile of each sensor's values over the whole
/// dataset, with fixed fallbacks when a sensor has no data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    pub temperature: f64,
    pub wind_speed: f64,
    pub irradiance: f64,
}

impl Thresholds {
    /// Fallback cutoffs when a sensor has no data at all.
    pub const FALLBACK: Thresholds = Thresholds {
        temperature: 15.0,
        wind_speed: 3.0,
        irradiance: 200.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_from_dataset_name() {
        assert_eq!(
            Sensor::from_dataset_name("temperature"),
            Some(Sensor::Temperature)
        );
        assert_eq!(
            Sensor::from_dataset_name("wind_speed"),
            Some(Sensor::WindSpeed)
        );
        assert_eq!(
            Sensor::from_dataset_name("irradiance"),
            Some(Sensor::Irradiance)
        );
        assert_eq!(Sensor::from_dataset_name("humidity"), None);
        assert_eq!(Sensor::from_dataset_name(""), None);
    }

    #[test]
    fn test_sensor_name_round_trip() {
        for sensor in [Sensor::Temperature, Sensor::WindSpeed, Sensor::Irradiance] {
            assert_eq!(Sensor::from_dataset_name(sensor.name()), Some(sensor));
        }
    }

    #[test]
    fn test_forecast_missing_sensor_serializes_as_null() {
        let forecast = Forecast {
            temperature: Some(12.5),
            wind_speed: None,
            irradiance: Some(310.0),
        };
        let json = serde_json::to_value(&forecast).unwrap();
        assert_eq!(json["temperature"], 12.5);
        assert!(json["wind_speed"].is_null());
        assert_eq!(json["irradiance"], 310.0);
    }

    #[test]
    fn test_tomorrow_conditions_keys() {
        let conditions = TomorrowConditions {
            warm: true,
            sunny: false,
            windy: true,
        };
        let json = serde_json::to_value(conditions).unwrap();
        assert_eq!(json["warm"], true);
        assert_eq!(json["sunny"], false);
        assert_eq!(json["windy"], true);
    }
}
