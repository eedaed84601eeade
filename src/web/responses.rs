//! HTTP response types and error mapping
//!
//! Success bodies carry `success: true`; failures carry only an `error`
//! message. Internal causes are logged here and never serialized.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::errors::AppError;
use crate::models::StudentSummary;

/// Public message for every server-side failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    /// The query exactly as submitted
    pub query: String,
    pub results: Vec<StudentSummary>,
    pub total: usize,
    pub total_students: usize,
}

impl SearchResponse {
    pub fn new(query: String, results: Vec<StudentSummary>, total_students: usize) -> Self {
        Self {
            success: true,
            query,
            total: results.len(),
            results,
            total_students,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub success: bool,
    pub total_students: usize,
    #[serde(rename = "ky_hoc")]
    pub cohort: String,
}

impl StatsResponse {
    pub fn new(total_students: usize, cohort: String) -> Self {
        Self {
            success: true,
            total_students,
            cohort,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Convert AppError to appropriate HTTP response
pub fn handle_error(error: AppError) -> Response {
    let (status, message) = match &error {
        AppError::Validation { message } => {
            warn!("Rejected request: {}", message);
            (StatusCode::BAD_REQUEST, message.clone())
        }
        AppError::DataUnavailable(_) => {
            error!("Request failed: {}", error);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
            )
        }
    };

    (status, Json(ErrorResponse { error: message })).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        handle_error(self)
    }
}

/// Success response helper
pub fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}
