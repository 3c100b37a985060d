//! # Health Check Handler
//!
//! Liveness endpoint for load balancers and deployment tooling. It does not
//! touch the store, so it stays green while the database is unreachable.

use axum::http::StatusCode;
use tracing::{debug, instrument};

/// Always returns `200 OK` with an empty body.
#[instrument]
pub async fn health_check() -> StatusCode {
    debug!("Health check endpoint accessed");
    StatusCode::OK
}
