//! Metrics collection and exposition.
//!
//! # Metrics
//! - `motorbrew_requests_total` (counter): requests by method, path, status
//! - `motorbrew_request_duration_seconds` (histogram): latency by method, path
//! - `motorbrew_uploads_total` (counter): records appended
//! - `motorbrew_uploads_stored` (gauge): records currently held
//! - `motorbrew_upload_resets_total` (counter)
//! - `motorbrew_angle_saves_total` (counter)
//!
//! Without an installed recorder every call here is a no-op, which is how
//! tests run.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    counter!(
        "motorbrew_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        "motorbrew_request_duration_seconds",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

pub fn record_upload(stored: usize) {
    counter!("motorbrew_uploads_total").increment(1);
    gauge!("motorbrew_uploads_stored").set(stored as f64);
}

pub fn record_uploads_reset() {
    counter!("motorbrew_upload_resets_total").increment(1);
    gauge!("motorbrew_uploads_stored").set(0.0);
}

pub fn record_angles_saved() {
    counter!("motorbrew_angle_saves_total").increment(1);
}

/// Middleware recording request count and latency per matched route.
///
/// Must be installed with `Router::route_layer` so `MatchedPath` is set.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    // Label by route template so unknown paths don't explode cardinality.
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;
    record_request(&method, &path, response.status().as_u16(), start);
    response
}
