//! pov-loadgen library.
//!
//! Two independent components sharing one crate:
//! - `telemetry`: bootstraps the observability stack and owns the
//!   trace-propagation rules for outbound requests.
//! - `scenario`: a synthetic user journey driven in a loop by the
//!   `loadgen` binary.

pub mod config;
pub mod lifecycle;
pub mod scenario;
pub mod telemetry;

pub use config::schema::{GeneratorConfig, TelemetryConfig};
pub use lifecycle::Shutdown;
pub use scenario::runner::ScenarioRunner;
pub use telemetry::bootstrap::TelemetryHandle;
