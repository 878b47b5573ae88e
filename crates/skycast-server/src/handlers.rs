//! Request handlers for the forecast endpoints.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use skycast_store::{parse_datetime, BeliefStore, StoreError};
use warp::{reply, Rejection, Reply};

use crate::reject::ApiError;

/// Query parameters for `GET /forecasts`.
#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    /// Knowledge time (ISO datetime)
    pub now: String,
    /// Target forecast time (ISO datetime)
    pub then: String,
}

/// Query parameters for `GET /tomorrow`.
#[derive(Debug, Deserialize)]
pub struct TomorrowQuery {
    /// Knowledge time (ISO datetime)
    pub now: String,
}

fn parse_param(name: &str, value: &str) -> Result<DateTime<Utc>, Rejection> {
    parse_datetime(value)
        .map_err(|e| ApiError::bad_request(format!("Invalid datetime for `{name}`: {e}")))
}

fn reject_store_error(err: StoreError) -> Rejection {
    match &err {
        StoreError::NoForecasts { .. } | StoreError::NoTomorrowForecasts { .. } => {
            tracing::warn!("{err}");
        }
        _ => tracing::error!("{err}"),
    }
    ApiError::from_store(err)
}

/// `GET /forecasts?now=..&then=..`
pub async fn get_forecasts(
    query: ForecastQuery,
    store: Arc<BeliefStore>,
) -> Result<impl Reply, Rejection> {
    let now = parse_param("now", &query.now)?;
    let then = parse_param("then", &query.then)?;

    tracing::info!("Getting forecasts - now: {now}, then: {then}");
    let forecast = store.forecast_at(now, then).map_err(reject_store_error)?;
    Ok(reply::json(&forecast))
}

/// `GET /tomorrow?now=..`
pub async fn get_tomorrow_conditions(
    query: TomorrowQuery,
    store: Arc<BeliefStore>,
) -> Result<impl Reply, Rejection> {
    let now = parse_param("now", &query.now)?;

    tracing::info!("Getting tomorrow's conditions - now: {now}");
    let conditions = store.tomorrow_conditions(now).map_err(reject_store_error)?;
    Ok(reply::json(&conditions))
}

/// `GET /health`
pub async fn health() -> Result<impl Reply, Rejection> {
    Ok(reply::json(&serde_json::json!({
        "status": "healthy",
        "message": "API is running",
    })))
}
