//! Synthetic traffic scenario.
//!
//! # Data Flow
//! ```text
//! GeneratorConfig
//!     → runner.rs (one virtual user, timed loop)
//!     → journey.rs (fixed six-step request sequence per iteration)
//!         ← fixtures.rs (airlines, passengers, flight numbers)
//!         ← injector.rs (independent error-injection draws)
//!     → metrics.rs (request counter, failed-check rate, latencies)
//! ```
//!
//! # Design Decisions
//! - Steps within an iteration run strictly sequentially; a failed check
//!   is recorded and the iteration continues
//! - Transport failures and non-success statuses fail a check identically
//! - The metrics aggregator is an explicit value threaded through the
//!   journey, not ambient global state
//! - Randomness comes from a seedable injected source so tests are
//!   deterministic

pub mod fixtures;
pub mod injector;
pub mod journey;
pub mod metrics;
pub mod runner;

pub use injector::ErrorInjector;
pub use metrics::{JourneyMetrics, Summary, Thresholds};
pub use runner::ScenarioRunner;
