//! Request admission and response hardening.
//!
//! - api_key.rs: `x-api-key` check in front of `POST /upload/`
//! - headers.rs: nosniff / frame / referrer headers on every response
//!
//! Body size limits are a tower-http layer configured in `http::server`.

pub mod api_key;
pub mod headers;

pub use api_key::{api_key_middleware, check_api_key, X_API_KEY};
