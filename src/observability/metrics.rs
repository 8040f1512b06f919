//! Metrics collection and exposition.
//!
//! # Metrics
//! - `bridge_requests_total` (counter): dispatches by content kind, status
//! - `bridge_dispatch_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Recording goes through the metrics facade; with no recorder installed
//!   the calls are no-ops, so the kernel records unconditionally
//! - The Prometheus exporter binds its own listener, separate from the
//!   application's

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and bind its exposition endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "metrics exporter started"),
        Err(e) => tracing::error!(address = %addr, error = %e, "failed to start metrics exporter"),
    }
}

/// Record one fallback dispatch.
pub fn record_dispatch(kind: &str, status: u16, start: Instant) {
    let latency = start.elapsed().as_secs_f64();
    counter!(
        "bridge_requests_total",
        "kind" => kind.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("bridge_dispatch_duration_seconds", "kind" => kind.to_string()).record(latency);
}
