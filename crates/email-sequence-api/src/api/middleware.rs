//! API key and request logging middleware.

use super::AppState;
use crate::auth::API_KEY_HEADER;
use crate::error::ApiError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, warn};

/// Reject requests without a valid `x-api-key` header.
///
/// Runs before the handler, so the request body is never read and the
/// registry is never touched for unauthorized callers.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorized = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|key| state.api_key.verify(key))
        .unwrap_or(false);

    if !authorized {
        warn!(uri = %request.uri(), "Rejected request with invalid API key");
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}

/// Log each request with its outcome and latency.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_client_error() || status.is_server_error() {
        warn!(%method, path = %path, status = status.as_u16(), elapsed_ms, "Request failed");
    } else {
        debug!(%method, path = %path, status = status.as_u16(), elapsed_ms, "Request handled");
    }

    response
}
