//! Route composition for the service.

use std::convert::Infallible;
use std::sync::Arc;

use skycast_store::BeliefStore;
use warp::{Filter, Rejection, Reply};

use crate::handlers;
use crate::reject;

/// Compose the full route tree: the two forecast endpoints, the health
/// check, and the JSON rejection handler.
pub fn routes(
    store: Arc<BeliefStore>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    forecasts(store.clone())
        .or(tomorrow(store))
        .or(health())
        .recover(reject::handle_rejection)
}

fn with_store(
    store: Arc<BeliefStore>,
) -> impl Filter<Extract = (Arc<BeliefStore>,), Error = Infallible> + Clone {
    warp::any().map(move || store.clone())
}

fn forecasts(
    store: Arc<BeliefStore>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::get()
        .and(warp::path("forecasts"))
        .and(warp::path::end())
        .and(warp::query::<handlers::ForecastQuery>())
        .and(with_store(store))
        .and_then(handlers::get_forecasts)
}

fn tomorrow(
    store: Arc<BeliefStore>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::get()
        .and(warp::path("tomorrow"))
        .and(warp::path::end())
        .and(warp::query::<handlers::TomorrowQuery>())
        .and(with_store(store))
        .and_then(handlers::get_tomorrow_conditions)
}

fn health() -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::get()
        .and(warp::path("health"))
        .and(warp::path::end())
        .and_then(handlers::health)
}
