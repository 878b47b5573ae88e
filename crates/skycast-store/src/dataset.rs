//! Beliefs dataset loader.
//!
//! The dataset is a CSV file with header
//! `sensor,event_start,belief_horizon_in_sec,event_value`. Each row is one
//! forecast belief; the belief time is derived as
//! `event_start - belief_horizon_in_sec`. Fields contain no quoting or
//! embedded commas, so rows are split directly.

use std::path::Path;

use chrono::Duration;
use skycast_core::StoreError;

use crate::time::parse_datetime;
use crate::types::{Belief, Sensor};

const EXPECTED_HEADER: [&str; 4] = [
    "sensor",
    "event_start",
    "belief_horizon_in_sec",
    "event_value",
];

/// Load beliefs from a CSV file.
pub fn load_beliefs(path: &Path) -> Result<Vec<Belief>, StoreError> {
    if !path.exists() {
        return Err(StoreError::DatasetNotFound(path.display().to_string()));
    }
    let raw = std::fs::read_to_string(path)?;
    parse_beliefs(&raw)
}

/// Parse beliefs from raw CSV text.
///
/// Rows with a sensor the service does not track are skipped with a warning;
/// otherwise malformed rows fail the load.
pub fn parse_beliefs(raw: &str) -> Result<Vec<Belief>, StoreError> {
    let mut lines = raw.lines().enumerate();

    match lines.next() {
        Some((_, header)) => check_header(header)?,
        None => return Ok(Vec::new()),
    }

    let mut beliefs = Vec::new();
    for (idx, line) in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_row(line).map_err(|message| StoreError::MalformedRow {
            line: idx + 1,
            message,
        })? {
            Some(belief) => beliefs.push(belief),
            None => tracing::warn!(line = idx + 1, "skipping row with unknown sensor"),
        }
    }
    Ok(beliefs)
}

fn check_header(header: &str) -> Result<(), StoreError> {
    let fields: Vec<&str> = header.split(',').map(str::trim).collect();
    if fields != EXPECTED_HEADER {
        return Err(StoreError::MalformedRow {
            line: 1,
            message: format!(
                "unexpected header `{}`, expected `{}`",
                header,
                EXPECTED_HEADER.join(",")
            ),
        });
    }
    Ok(())
}

fn parse_row(line: &str) -> Result<Option<Belief>, String> {
    let mut fields = line.split(',').map(str::trim);
    let (Some(sensor), Some(event_start), Some(horizon), Some(value)) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err("expected 4 columns".to_string());
    };
    if fields.next().is_some() {
        return Err("expected 4 columns".to_string());
    }

    let Some(sensor) = Sensor::from_dataset_name(sensor) else {
        return Ok(None);
    };

    let event_start =
        parse_datetime(event_start).map_err(|e| format!("invalid event_start: {e}"))?;
    let horizon_sec: f64 = horizon
        .parse()
        .map_err(|e| format!("invalid belief_horizon_in_sec: {e}"))?;
    let value: f64 = value
        .parse()
        .map_err(|e| format!("invalid event_value: {e}"))?;

    let belief_time = event_start - Duration::milliseconds((horizon_sec * 1000.0).round() as i64);

    Ok(Some(Belief {
        sensor,
        event_start,
        belief_time,
        value,
    }))
}
