//! Telemetry bootstrap.
//!
//! Wires the process-wide observability stack at startup: a structured
//! logging subscriber, an optional Prometheus metrics endpoint, and the
//! trace-propagation rule set. Produces a [`TelemetryHandle`] the hosting
//! application keeps for the process lifetime.

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::schema::TelemetryConfig;
use crate::telemetry::propagation::PropagationRules;

/// Fixed application identity reported with all emitted telemetry.
pub const APP_NAME: &str = "pov-sim-frontend";
pub const APP_VERSION: &str = "1.0.0";

/// Error type for telemetry initialization.
///
/// None of these are handled internally; a bootstrap failure should be
/// visible to whatever invoked it, not silently swallowed.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),

    #[error("invalid metrics address {address:?}: {source}")]
    MetricsAddress {
        address: String,
        source: std::net::AddrParseError,
    },

    #[error("failed to install metrics exporter: {0}")]
    Exporter(#[from] BuildError),
}

/// Handle to the initialized telemetry stack.
#[derive(Debug, Clone)]
pub struct TelemetryHandle {
    app_name: &'static str,
    app_version: &'static str,
    environment: String,
    collector_url: String,
    propagation: PropagationRules,
}

impl TelemetryHandle {
    pub fn app_name(&self) -> &str {
        self.app_name
    }

    pub fn app_version(&self) -> &str {
        self.app_version
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn collector_url(&self) -> &str {
        &self.collector_url
    }

    /// Rules deciding which outbound requests carry trace headers.
    pub fn propagation(&self) -> &PropagationRules {
        &self.propagation
    }
}

/// Initialize telemetry for the process and return the handle.
///
/// Installs the tracing subscriber (filter from `RUST_LOG`, falling back
/// to a sensible default) and, when a metrics address is configured, a
/// Prometheus exposition endpoint. Must be called at most once; a second
/// call fails with [`TelemetryError::Subscriber`].
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryHandle, TelemetryError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pov_loadgen=info,loadgen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    if let Some(address) = &config.metrics_address {
        let addr: SocketAddr = address.parse().map_err(|source| TelemetryError::MetricsAddress {
            address: address.clone(),
            source,
        })?;
        PrometheusBuilder::new().with_http_listener(addr).install()?;
        tracing::info!(%addr, "Prometheus metrics endpoint started");
    }

    let handle = TelemetryHandle {
        app_name: APP_NAME,
        app_version: APP_VERSION,
        environment: config.environment.clone(),
        collector_url: config.collector_url.clone(),
        propagation: PropagationRules::default(),
    };

    tracing::info!(
        app = handle.app_name,
        version = handle.app_version,
        environment = %handle.environment,
        collector = %handle.collector_url,
        "telemetry initialized - frontend observability enabled"
    );

    Ok(handle)
}
