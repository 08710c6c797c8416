//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request handler produces:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request counter and latency histogram)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape), when enabled
//! ```
//!
//! # Design Decisions
//! - Log filter comes from RUST_LOG, falling back to the configured level
//! - Metrics are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
