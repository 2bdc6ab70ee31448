//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `health`: Liveness, readiness, and metrics
//! - `medicine`: Medicine information lookup

pub mod health;
pub mod medicine;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API status and base info
///
/// This is the root endpoint (GET /).
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "message": "Medicine Assistant API is running",
///   "version": "0.1.0",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "status": "ok",
        "message": "Medicine Assistant API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api/medicine-info",
            "/health",
            "/ready",
            "/metrics"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
