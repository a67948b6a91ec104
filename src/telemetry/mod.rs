//! Telemetry subsystem.
//!
//! # Data Flow
//! ```text
//! bootstrap.rs:
//!     TelemetryConfig → tracing subscriber (structured logs)
//!                     → Prometheus exporter (optional)
//!                     → TelemetryHandle (app identity + propagation rules)
//!
//! propagation.rs:
//!     outbound request URL → ordered regex matchers
//!                          → traceparent header when matched
//! ```
//!
//! # Design Decisions
//! - Bootstrap runs once at startup; failures surface to the caller uncaught
//! - Trace headers go only to an allow-list of backend origins; all other
//!   targets are left untouched

pub mod bootstrap;
pub mod propagation;

pub use bootstrap::{init_telemetry, TelemetryError, TelemetryHandle};
pub use propagation::PropagationRules;
