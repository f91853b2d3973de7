//! `x-api-key` presence check.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::http::response::ApiError;
use crate::http::server::AppState;

pub const X_API_KEY: &str = "x-api-key";

/// Outcome of checking a presented key against the configured allow-list.
///
/// Keys are compared as raw header bytes; non-ASCII keys are still keys.
pub fn check_api_key(presented: Option<&[u8]>, allowed: &[String]) -> Result<(), ApiError> {
    let key = match presented {
        Some(k) if !k.is_empty() => k,
        _ => return Err(ApiError::MissingApiKey),
    };

    if allowed.is_empty() || allowed.iter().any(|a| a.as_bytes() == key) {
        Ok(())
    } else {
        Err(ApiError::InvalidApiKey)
    }
}

pub async fn api_key_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let presented = request
        .headers()
        .get(X_API_KEY)
        .map(|h| h.as_bytes());

    check_api_key(presented, &state.api_keys)?;
    Ok(next.run(request).await)
}
