use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use fauxforge_core::ErrorResponse;
use fauxforge_generate::GenerationError;
use fauxforge_store::StoreError;

/// Message returned when a key names no stored dataset.
pub const NOT_FOUND_MESSAGE: &str = "Data not found for the given key";
/// Message returned after a successful delete.
pub const DELETED_MESSAGE: &str = "File deleted successfully";

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Request-scoped failure, rendered as `{"error": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Returns `400 Bad Request`
    #[error("{0}")]
    BadRequest(String),

    /// Returns `404 Not Found`
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    /// Returns `503 Service Unavailable`
    #[error("{0}")]
    Unavailable(String),

    /// Returns `500 Internal Server Error`
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<fauxforge_core::Error> for ApiError {
    fn from(err: fauxforge_core::Error) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::Cancelled { .. } => {
                Self::Unavailable("generation was cancelled".to_string())
            }
            GenerationError::DepthExceeded { .. }
            | GenerationError::ArrayTooLarge { .. }
            | GenerationError::ValueBudgetExceeded { .. } => Self::BadRequest(err.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::NotFound,
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Internal(detail) => {
                error!(error = %detail, "request failed");
                INTERNAL_MESSAGE.to_string()
            }
            Self::Unavailable(detail) => {
                warn!(error = %detail, "request abandoned");
                detail
            }
            other => other.to_string(),
        };
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
