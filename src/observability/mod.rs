//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! router / transport produce:
//!     → logging.rs (structured log events, one span per resolution)
//!     → metrics.rs (counters, histograms)
//! ```
//!
//! # Design Decisions
//! - Every resolution carries a UUID v4 resolution id in its span
//! - Metrics are cheap (facade calls, no-op without a recorder)

pub mod logging;
pub mod metrics;
