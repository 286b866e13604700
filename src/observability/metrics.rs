//! Metrics collection and exposition.
//!
//! # Metrics
//! - `navigation_requests_total` (counter): requests by outcome
//! - `navigation_request_duration_seconds` (histogram): handler latency
//! - `codec_lookups_total` (counter): encode/decode API calls by result
//! - `config_reloads_total` (counter): applied hot reloads

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one navigation request.
pub fn record_navigation(outcome: &'static str, start: Instant) {
    counter!("navigation_requests_total", "outcome" => outcome).increment(1);
    histogram!("navigation_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

/// Record an encode/decode API call.
pub fn record_codec_lookup(op: &'static str, found: bool) {
    let result = if found { "found" } else { "not_found" };
    counter!("codec_lookups_total", "op" => op, "result" => result).increment(1);
}

pub fn record_config_reload() {
    counter!("config_reloads_total").increment(1);
}
