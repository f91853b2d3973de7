//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and stores produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Prometheus scrape endpoint (when enabled)
//! ```
//!
//! # Design Decisions
//! - Request ID is recorded on the tower-http trace span
//! - Metrics are labelled by route template, not raw path

pub mod logging;
pub mod metrics;
