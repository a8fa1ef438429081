//! API error envelope shared by every endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::foundation::ErrorCode;
use crate::ports::QueryError;

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: String,
    pub status_code: u16,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            status_code: status.as_u16(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Errors returned by the HTTP handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Query(QueryError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Query(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(error: QueryError) -> Self {
        ApiError::Query(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::BadRequest(message) => {
                ErrorResponse::new(ErrorCode::BadRequest, status, message)
            }
            ApiError::Query(err) => {
                if status.is_server_error() {
                    tracing::error!("Query failed on reference data: {}", err);
                }
                ErrorResponse::new(err.code(), status, err.to_string())
            }
        };
        (status, Json(body)).into_response()
    }
}
