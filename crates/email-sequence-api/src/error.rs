//! Error types for the email sequence API.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid API key")]
    Unauthorized,

    #[error("Client not found")]
    ClientNotFound(u64),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("{0}")]
    InvalidBody(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ApiError {
    /// HTTP status and machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ApiError::ClientNotFound(_) => (StatusCode::NOT_FOUND, "CLIENT_NOT_FOUND"),
            ApiError::MissingField(_) => (StatusCode::BAD_REQUEST, "MISSING_FIELD"),
            // Body parse failures surface as server errors.
            ApiError::InvalidBody(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INVALID_BODY"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Unauthorized.status_and_code().0,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::ClientNotFound(99).status_and_code().0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::MissingField("client_id").status_and_code().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidBody("bad json".into()).status_and_code().0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Unauthorized.to_string(), "Invalid API key");
        assert_eq!(ApiError::ClientNotFound(7).to_string(), "Client not found");
        assert_eq!(
            ApiError::MissingField("sequence_id").to_string(),
            "Missing required field: sequence_id"
        );
    }
}
