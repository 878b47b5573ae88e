//! Centralized error types for the Skycast service.
//!
//! This module provides a typed error hierarchy that:
//! - Enables precise error handling throughout the codebase
//! - Maps cleanly onto HTTP status codes at the server boundary
//! - Preserves full error context for debugging/logging

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Top-level service error type.
///
/// All errors in the Skycast service should be convertible to this type.
/// Use `status_code()` to get the HTTP status the error should surface as.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns the HTTP status code this error should surface as.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Store(e) => e.status_code(),
            AppError::Config(_) | AppError::Io(_) | AppError::Other(_) => 500,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Beliefs dataset and lookup errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Weather data file not found at {0}")]
    DatasetNotFound(String),

    #[error("Failed to read weather data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed dataset row at line {line}: {message}")]
    MalformedRow { line: usize, message: String },

    #[error("No forecasts available for {then} based on data available at {now}")]
    NoForecasts {
        now: DateTime<Utc>,
        then: DateTime<Utc>,
    },

    #[error("No forecasts available for tomorrow based on data available at {now}")]
    NoTomorrowForecasts { now: DateTime<Utc> },
}

impl StoreError {
    /// Returns the HTTP status code this error should surface as.
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::NoForecasts { .. } | StoreError::NoTomorrowForecasts { .. } => 404,
            StoreError::DatasetNotFound(_) | StoreError::Io(_) | StoreError::MalformedRow { .. } => {
                500
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_app_error_conversion() {
        let config_err = ConfigError::Invalid("bad port".into());
        let app_err: AppError = config_err.into();
        assert!(matches!(app_err, AppError::Config(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_no_forecasts_is_404() {
        let now = Utc.with_ymd_and_hms(2024, 2, 14, 6, 0, 0).unwrap();
        let then = Utc.with_ymd_and_hms(2024, 2, 14, 12, 0, 0).unwrap();
        let err = StoreError::NoForecasts { now, then };
        assert_eq!(err.status_code(), 404);
        assert!(err.to_string().starts_with("No forecasts available"));
    }

    #[test]
    fn test_dataset_errors_are_500() {
        assert_eq!(
            StoreError::DatasetNotFound("weather.csv".into()).status_code(),
            500
        );
        let err = StoreError::MalformedRow {
            line: 3,
            message: "expected 4 columns".into(),
        };
        assert_eq!(err.status_code(), 500);
        assert!(err.to_string().contains("line 3"));
    }
}
