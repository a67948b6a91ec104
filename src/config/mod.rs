//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (lookup & parse, with defaults)
//!     → validation.rs (semantic checks)
//!     → GeneratorConfig / TelemetryConfig (validated, immutable)
//!     → passed by reference to the scenario runner / bootstrapper
//! ```
//!
//! # Design Decisions
//! - Config is read once at process start; there is no reload path
//! - Every option has a default so the binary runs with an empty environment
//! - Loading goes through an injectable lookup function so tests supply a
//!   map instead of mutating the process environment
//! - Validation separates syntactic (parse) from semantic checks and
//!   reports all errors, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{generator_from_env, telemetry_from_env, ConfigError};
pub use schema::GeneratorConfig;
pub use schema::TelemetryConfig;
