//! Configuration schema definitions.
//!
//! All types derive Serde traits so a config snapshot can be logged or
//! serialized; values are populated from the environment by `loader`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the synthetic traffic generator.
///
/// Immutable for the lifetime of a run. Base URLs are stored without a
/// trailing slash; the journey appends absolute paths.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Base URL of the frontend under test.
    pub frontend_base_url: String,

    /// Base URL of the flights API.
    pub flights_api_url: String,

    /// Base URL of the airlines API.
    pub airlines_api_url: String,

    /// Probability in [0, 1] that any given backend API call asks the
    /// backend to simulate a server error.
    pub error_rate: f64,

    /// Total run duration in seconds. Iterations already in flight when
    /// the budget elapses are allowed to finish.
    pub duration_secs: u64,

    /// Pause between iterations, in seconds.
    pub interval_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            frontend_base_url: "http://frontend:3000".to_string(),
            flights_api_url: "http://flights:5001".to_string(),
            airlines_api_url: "http://airlines:8080".to_string(),
            error_rate: 0.1,
            duration_secs: 60,
            interval_secs: 30,
        }
    }
}

impl GeneratorConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Configuration for the telemetry bootstrapper.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Endpoint of the collector that ingests emitted telemetry.
    pub collector_url: String,

    /// Deployment environment label attached to the application identity.
    pub environment: String,

    /// Bind address for the Prometheus metrics endpoint. Exposition is
    /// disabled when unset.
    pub metrics_address: Option<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            collector_url: "http://localhost:12347/collect".to_string(),
            environment: "production".to_string(),
            metrics_address: None,
        }
    }
}
