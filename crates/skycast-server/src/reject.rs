//! Rejection handling: every error surfaces as a JSON `{"detail": ...}` body.

use serde::Serialize;
use skycast_core::StoreError;
use warp::http::StatusCode;
use warp::{reply, Rejection, Reply};

/// Error carried through warp rejections.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl warp::reject::Reject for ApiError {}

impl ApiError {
    /// A 400 rejection with the given detail message.
    pub fn bad_request(detail: impl Into<String>) -> Rejection {
        warp::reject::custom(Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        })
    }

    /// Map a store error onto its HTTP status.
    pub fn from_store(err: StoreError) -> Rejection {
        let status = StatusCode::from_u16(err.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        warp::reject::custom(Self {
            status,
            detail: err.to_string(),
        })
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Convert rejections into JSON error responses. Never re-rejects.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Rejection> {
    let (status, detail) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else if let Some(api) = err.find::<ApiError>() {
        (api.status, api.detail.clone())
    } else if let Some(invalid) = err.find::<warp::reject::InvalidQuery>() {
        (StatusCode::BAD_REQUEST, format!("Invalid query: {invalid}"))
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed".to_string(),
        )
    } else {
        tracing::error!("Unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    };

    Ok(reply::with_status(
        reply::json(&ErrorBody { detail }),
        status,
    ))
}
