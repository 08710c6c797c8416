//! Metrics collection and exposition.
//!
//! # Metrics
//! - `fixture_requests_total` (counter): requests by method, route, status
//! - `fixture_request_duration_seconds` (histogram): handler latency

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and serve it on `addr`.
///
/// Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one answered request.
pub fn record_request(method: &str, status: u16, route: &str, start: Instant) {
    let method = method.to_owned();
    let route = route.to_owned();
    let status = status.to_string();

    metrics::counter!(
        "fixture_requests_total",
        "method" => method.clone(),
        "route" => route.clone(),
        "status" => status.clone()
    )
    .increment(1);
    metrics::histogram!(
        "fixture_request_duration_seconds",
        "method" => method,
        "route" => route,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());
}
