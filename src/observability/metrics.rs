//! Metrics collection and exposition.
//!
//! # Metrics
//! - `calc_requests_total` (counter): completed requests by method, path, status
//! - `calc_request_duration_seconds` (histogram): latency distribution
//! - `calc_auth_failures_total` (counter): rejected unauthenticated requests
//! - `calc_rate_limited_total` (counter): requests rejected by the rate limiter
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Exporter listens on its own address, separate from the service port

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed request with its latency.
pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("calc_requests_total", &labels).increment(1);
    metrics::histogram!("calc_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

/// Record a request rejected for a missing or unknown session token.
pub fn record_auth_failure() {
    metrics::counter!("calc_auth_failures_total").increment(1);
}

/// Record a request rejected by the per-user rate limiter.
pub fn record_rate_limited() {
    metrics::counter!("calc_rate_limited_total").increment(1);
}
