//! HTTP error mapping
//!
//! The engine stays transport-agnostic; this is the only place query
//! failures meet HTTP. Validation maps to 400, storage failures to 500,
//! both with an `{"error": msg}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::Logger;
use crate::query::QueryError;

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Query(#[from] QueryError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Query(QueryError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Query(QueryError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Query(QueryError::Validation(msg)) => {
                Logger::warn("QUERY_REJECTED", &[("reason", msg)]);
            }
            ApiError::Query(QueryError::Storage(cause)) => {
                Logger::error("STORE_ERROR", &[("cause", &cause.to_string())]);
            }
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
