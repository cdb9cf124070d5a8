//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! middleware + server produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (per-outcome counters)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape)
//! ```

pub mod logging;
pub mod metrics;
