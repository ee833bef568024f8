//! Mapping of inventory errors onto HTTP responses.

use axum::{http::StatusCode, Json};
use mpm_core::{ErrorKind, InventoryError};
use serde::Serialize;
use tracing::{error, warn};

/// JSON error body: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

pub fn status_for(err: &InventoryError) -> StatusCode {
    match err.kind() {
        ErrorKind::BadInput => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Convert an inventory error into a status code and JSON body.
pub fn api_error(err: InventoryError) -> ApiError {
    let status = status_for(&err);
    if status.is_server_error() {
        error!(error = %err, "Request failed");
    } else {
        warn!(status = status.as_u16(), error = %err, "Request rejected");
    }

    (status, Json(ErrorBody { detail: err.to_string() }))
}

/// JSON error for a request the framework rejected before it reached the
/// inventory, keeping the rejection's own status (400, 413, 415, 422).
pub fn rejection_error(status: StatusCode, detail: String) -> ApiError {
    warn!(status = status.as_u16(), detail = %detail, "Request rejected by extractor");
    (status, Json(ErrorBody { detail }))
}
