//! HTTP error responses
//!
//! Every failure leaves the API as `{"error": {"code": ..., "message": ...}}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::error::DomainError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or unresolvable bearer token (401)
    #[error("Authentication required")]
    Unauthenticated,

    /// Caller does not own the requested child (403)
    #[error("{0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("{0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error (500); the detail is logged, not returned
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            DomainError::Unauthorized { .. } => ApiError::Forbidden(err.to_string()),
            DomainError::Validation(message) => ApiError::BadRequest(message),
            DomainError::ComputationInvariantViolation(ref detail) => {
                error!("Exposure computation invariant violated: {}", detail);
                ApiError::Internal(err.to_string())
            }
            DomainError::Storage(ref source) => {
                error!("Storage failure: {:#}", source);
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHENTICATED",
                "Authentication required".to_string(),
            ),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_status_mapping() {
        let cases = [
            (DomainError::child_not_found("c1"), StatusCode::NOT_FOUND),
            (
                DomainError::Unauthorized {
                    child_id: "c1".to_string(),
                },
                StatusCode::FORBIDDEN,
            ),
            (DomainError::validation("bad"), StatusCode::BAD_REQUEST),
            (
                DomainError::ComputationInvariantViolation("broken".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                DomainError::Storage(anyhow::anyhow!("disk full")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (domain_error, expected) in cases {
            let response = ApiError::from(domain_error).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_unauthenticated_is_401() {
        let response = ApiError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
