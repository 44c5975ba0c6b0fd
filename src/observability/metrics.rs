//! Metrics collection and exposition.
//!
//! # Metrics
//! - `bid_requests_total` (counter): total requests by method, status
//! - `bid_request_duration_seconds` (histogram): latency distribution

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter started"),
        Err(err) => tracing::error!(error = %err, "Failed to install metrics exporter"),
    }

    metrics::describe_counter!("bid_requests_total", "Total bid requests handled");
    metrics::describe_histogram!(
        "bid_request_duration_seconds",
        "Latency distribution of bid requests"
    );
}

/// Record the outcome of one handled request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    metrics::counter!(
        "bid_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "bid_request_duration_seconds",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
