//! Scenario runner.
//!
//! # Responsibilities
//! - Drive the journey on a timed loop as one virtual user
//! - Enforce the overall run-duration budget
//! - Pause between iterations and react to the shutdown signal
//!
//! # Design Decisions
//! - The duration budget gates the *start* of an iteration; an iteration
//!   already in flight runs to completion
//! - Exactly one virtual user, so the metrics aggregator has a single
//!   writer and needs no locking

use std::time::Instant;

use tokio::sync::broadcast;

use crate::config::schema::GeneratorConfig;
use crate::scenario::injector::ErrorInjector;
use crate::scenario::journey;
use crate::scenario::metrics::JourneyMetrics;

/// One virtual user running the journey in a loop until the duration
/// budget elapses.
pub struct ScenarioRunner {
    config: GeneratorConfig,
    client: reqwest::Client,
    injector: ErrorInjector,
    once: bool,
}

impl ScenarioRunner {
    /// Runner with an OS-seeded error injector.
    pub fn new(config: GeneratorConfig) -> Self {
        let injector = ErrorInjector::new(config.error_rate);
        Self::with_injector(config, injector)
    }

    /// Runner with a caller-supplied injector, for deterministic runs.
    pub fn with_injector(config: GeneratorConfig, injector: ErrorInjector) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            injector,
            once: false,
        }
    }

    /// Stop after a single iteration; used for smoke runs.
    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }

    /// Print the one-time setup banner describing the endpoints under test
    /// and the active configuration. Diagnostic only.
    pub fn print_banner(&self) {
        let c = &self.config;
        println!("{}", "=".repeat(60));
        println!("Synthetic load scenario - one virtual user");
        println!("{}", "=".repeat(60));
        println!();
        println!("Endpoints tested:");
        println!("  1. GET  {}/", c.frontend_base_url);
        println!("  2. GET  {}/flights", c.frontend_base_url);
        println!("  3. GET  {}/flights/{{airline}}", c.flights_api_url);
        println!("  4. POST {}/flight", c.flights_api_url);
        println!("  5. GET  {}/airlines", c.frontend_base_url);
        println!("  6. GET  {}/airlines", c.airlines_api_url);
        println!();
        println!("Interval:   {}s", c.interval_secs);
        println!("Duration:   {}s", c.duration_secs);
        println!("Error rate: {:.1}%", c.error_rate * 100.0);
        println!("{}", "=".repeat(60));
    }

    /// Run iterations until the duration budget elapses or shutdown is
    /// signalled, returning the accumulated metrics.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) -> JourneyMetrics {
        let deadline = Instant::now() + self.config.duration();
        let mut metrics = JourneyMetrics::new();
        let mut iteration: u64 = 0;

        loop {
            if Instant::now() >= deadline {
                tracing::info!(iterations = iteration, "run duration elapsed");
                break;
            }

            iteration += 1;
            tracing::info!(iteration, "starting test iteration");
            journey::run_iteration(&self.client, &self.config, &mut self.injector, &mut metrics)
                .await;
            tracing::info!(
                iteration,
                requests = metrics.requests(),
                error_rate = metrics.error_rate(),
                "iteration complete"
            );

            if self.once {
                break;
            }

            tokio::select! {
                _ = tokio::time::sleep(self.config.interval()) => {}
                _ = shutdown.recv() => {
                    tracing::info!("shutdown signal received, stopping scenario");
                    break;
                }
            }
        }

        metrics
    }
}
