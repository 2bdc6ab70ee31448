use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use medassist::{LookupError, MedicineInfo};
use serde::{Deserialize, Serialize};

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The catalog failed to load. Client-facing: the deployment needs
    /// fixing, not the query.
    #[error("Configuration error: medicine catalog unavailable ({reason})")]
    CatalogUnavailable {
        reason: String,
        payload: Box<MedicineInfo>,
    },

    #[error("Service not ready: {0}")]
    NotReady(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) | ServerError::CatalogUnavailable { .. } => {
                StatusCode::BAD_REQUEST
            }
            ServerError::NotReady(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Internal(_) | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::CatalogUnavailable { .. } => "CATALOG_UNAVAILABLE",
            ServerError::NotReady(_) => "NOT_READY",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
            ServerError::NotFound => "NOT_FOUND",
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ServerError::CatalogUnavailable { payload, .. } => serde_json::to_value(payload).ok(),
            _ => None,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }

        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
                details: self.details(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<LookupError> for ServerError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::CatalogUnavailable { reason, payload } => ServerError::CatalogUnavailable {
                reason,
                payload: Box::new(payload),
            },
        }
    }
}

impl From<tokio::task::JoinError> for ServerError {
    fn from(err: tokio::task::JoinError) -> Self {
        ServerError::Internal(format!("lookup task failed: {err}"))
    }
}
