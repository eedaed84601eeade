//! Liveness check; never touches the data file

use axum::response::Response;

use crate::web::responses::{ok, HealthResponse};

pub async fn health_check() -> Response {
    ok(HealthResponse::healthy())
}
