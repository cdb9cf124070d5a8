//! Metrics collection and exposition.
//!
//! # Metrics
//! - `accept_events_requests_total` (counter): requests seen by the
//!   middleware, labelled by `outcome`
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed
//! - The Prometheus exporter is optional and owned by the binary

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::events::Outcome;

pub const REQUESTS_TOTAL: &str = "accept_events_requests_total";

/// Count one request by how its `Accept-Events` header was classified.
pub fn record_outcome(outcome: &Outcome) {
    metrics::counter!(REQUESTS_TOTAL, "outcome" => outcome.label()).increment(1);
}

/// Install the Prometheus recorder with an HTTP scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}
