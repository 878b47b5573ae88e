//! HTTP layer for the Skycast forecast service.
//!
//! Exposes the read endpoints over warp:
//! - `GET /forecasts?now=..&then=..` - forecast for `then` as known at `now`
//! - `GET /tomorrow?now=..` - boolean indicators for the day after `now`
//! - `GET /health` - liveness check

pub mod handlers;
pub mod reject;
pub mod routes;

pub use routes::routes;
