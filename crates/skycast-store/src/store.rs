//! In-memory beliefs store with as-of query operations.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Duration, NaiveTime, Utc};
use skycast_core::StoreError;

use crate::dataset;
use crate::types::{Belief, Forecast, Sensor, Thresholds, TomorrowConditions};

/// Immutable beliefs dataset answering "as-of" forecast queries.
///
/// Loaded once at startup; requests share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct BeliefStore {
    beliefs: Vec<Belief>,
    thresholds: Thresholds,
}

impl BeliefStore {
    /// Load the store from a CSV dataset file.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let beliefs = dataset::load_beliefs(path)?;
        Ok(Self::new(beliefs))
    }

    /// Build the store from already-parsed beliefs.
    pub fn new(beliefs: Vec<Belief>) -> Self {
        let thresholds = compute_thresholds(&beliefs);

        match event_range(&beliefs) {
            Some((min, max)) => tracing::info!(
                "Loaded {} beliefs, event range {} to {}",
                beliefs.len(),
                min,
                max
            ),
            None => tracing::warn!("Loaded an empty beliefs dataset"),
        }
        tracing::info!(
            "Thresholds - temp: {:.1}°C, wind: {:.1} m/s, irradiance: {:.1} W/m²",
            thresholds.temperature,
            thresholds.wind_speed,
            thresholds.irradiance
        );

        Self {
            beliefs,
            thresholds,
        }
    }

    /// Per-sensor cutoffs derived from the dataset.
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Number of beliefs in the store.
    pub fn len(&self) -> usize {
        self.beliefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beliefs.is_empty()
    }

    /// The forecast for `then` as it was known at `now`.
    ///
    /// For each sensor, the belief with the latest belief time no later than
    /// `now` wins. Errors with `NoForecasts` if no sensor has a matching
    /// belief.
    pub fn forecast_at(
        &self,
        now: DateTime<Utc>,
        then: DateTime<Utc>,
    ) -> Result<Forecast, StoreError> {
        let mut latest: HashMap<Sensor, &Belief> = HashMap::new();
        for belief in &self.beliefs {
            if belief.belief_time > now || belief.event_start != then {
                continue;
            }
            let slot = latest.entry(belief.sensor).or_insert(belief);
            if belief.belief_time > slot.belief_time {
                *slot = belief;
            }
        }

        if latest.is_empty() {
            return Err(StoreError::NoForecasts { now, then });
        }

        Ok(Forecast {
            temperature: latest.get(&Sensor::Temperature).map(|b| b.value),
            wind_speed: latest.get(&Sensor::WindSpeed).map(|b| b.value),
            irradiance: latest.get(&Sensor::Irradiance).map(|b| b.value),
        })
    }

    /// Boolean indicators for the UTC calendar day after `now`.
    ///
    /// The latest belief per `(event_start, sensor)` known at `now` is kept;
    /// a flag is set when any kept value exceeds its sensor's threshold.
    pub fn tomorrow_conditions(
        &self,
        now: DateTime<Utc>,
    ) -> Result<TomorrowConditions, StoreError> {
        let tomorrow_start = (now.date_naive() + Duration::days(1))
            .and_time(NaiveTime::MIN)
            .and_utc();
        let tomorrow_end = tomorrow_start + Duration::days(1);

        let mut latest: HashMap<(DateTime<Utc>, Sensor), &Belief> = HashMap::new();
        for belief in &self.beliefs {
            if belief.belief_time > now
                || belief.event_start < tomorrow_start
                || belief.event_start >= tomorrow_end
            {
                continue;
            }
            let slot = latest
                .entry((belief.event_start, belief.sensor))
                .or_insert(belief);
            if belief.belief_time > slot.belief_time {
                *slot = belief;
            }
        }

        if latest.is_empty() {
            return Err(StoreError::NoTomorrowForecasts { now });
        }

        let exceeds = |sensor: Sensor, threshold: f64| {
            latest
                .values()
                .any(|b| b.sensor == sensor && b.value > threshold)
        };

        Ok(TomorrowConditions {
            warm: exceeds(Sensor::Temperature, self.thresholds.temperature),
            sunny: exceeds(Sensor::Irradiance, self.thresholds.irradiance),
            windy: exceeds(Sensor::WindSpeed, self.thresholds.wind_speed),
        })
    }
}

fn event_range(beliefs: &[Belief]) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let min = beliefs.iter().map(|b| b.event_start).min()?;
    let max = beliefs.iter().map(|b| b.event_start).max()?;
    Some((min, max))
}

fn compute_thresholds(beliefs: &[Belief]) -> Thresholds {
    let values_for = |sensor: Sensor| -> Vec<f64> {
        beliefs
            .iter()
            .filter(|b| b.sensor == sensor)
            .map(|b| b.value)
            .collect()
    };

    Thresholds {
        temperature: percentile(values_for(Sensor::Temperature), 75.0)
            .unwrap_or(Thresholds::FALLBACK.temperature),
        wind_speed: percentile(values_for(Sensor::WindSpeed), 75.0)
            .unwrap_or(Thresholds::FALLBACK.wind_speed),
        irradiance: percentile(values_for(Sensor::Irradiance), 75.0)
            .unwrap_or(Thresholds::FALLBACK.irradiance),
    }
}

/// Percentile with linear interpolation between closest ranks.
fn percentile(mut values: Vec<f64>, pct: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));

    let rank = pct / 100.0 * (values.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    Some(values[lo] + (values[hi] - values[lo]) * frac)
}
