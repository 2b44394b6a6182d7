//! API error handling
//!
//! Every failure maps to a structured JSON body with a machine-readable
//! `error` kind and a human-readable `message`. Transient store failures
//! become 503 so callers and load balancers know to retry.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_ledger::{LedgerError, StoreError};

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller-fixable request problem; carries the validation kind
    #[error("{message}")]
    Validation {
        kind: &'static str,
        message: String,
    },

    /// The store is unreachable or could not converge; retryable
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Statement rendered but the artifact upload failed; retryable
    #[error("Artifact storage failed: {0}")]
    ArtifactStorage(String),

    /// Anything unexpected
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            ApiError::Validation { kind, message } => (StatusCode::BAD_REQUEST, kind, message),
            ApiError::Unavailable(message) => {
                (StatusCode::SERVICE_UNAVAILABLE, "storage_unavailable", message)
            }
            ApiError::ArtifactStorage(message) => {
                (StatusCode::BAD_GATEWAY, "artifact_persist_failure", message)
            }
            ApiError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
            }
        };

        let body = ErrorResponse {
            error: kind.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match &err {
            LedgerError::Validation(_) | LedgerError::Store(StoreError::InvalidKey(_)) => {
                ApiError::Validation {
                    kind: err.kind(),
                    message: err.to_string(),
                }
            }
            LedgerError::Store(_) => ApiError::Unavailable(err.to_string()),
            LedgerError::ArtifactPersist(_) => ApiError::ArtifactStorage(err.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::from(LedgerError::from(err))
    }
}
