//! Metrics collection.
//!
//! # Metrics
//! - `route_resolutions_total` (counter): resolutions by route, outcome
//! - `route_resolution_duration_seconds` (histogram): resolution latency by route
//! - `transport_requests_total` (counter): backend calls by endpoint, status
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; the embedding application installs an exporter
//! - Without a recorder every call is a no-op

use std::time::Duration;

use crate::transport::Endpoint;

/// Record one finished resolution.
pub fn record_resolution(route: &str, outcome: &'static str, elapsed: Duration) {
    ::metrics::counter!(
        "route_resolutions_total",
        "route" => route.to_string(),
        "outcome" => outcome
    )
    .increment(1);
    ::metrics::histogram!(
        "route_resolution_duration_seconds",
        "route" => route.to_string()
    )
    .record(elapsed.as_secs_f64());
}

/// Record one backend round trip.
pub fn record_transport_call(endpoint: Endpoint, status: u16) {
    ::metrics::counter!(
        "transport_requests_total",
        "endpoint" => endpoint.path(),
        "status" => status.to_string()
    )
    .increment(1);
}
