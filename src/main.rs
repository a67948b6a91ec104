//! loadgen - synthetic traffic generator.
//!
//! Simulates one user journey across the frontend and the two backend
//! APIs on a timed loop, with configurable error injection, and evaluates
//! pass/fail thresholds at run end.

use clap::Parser;

use pov_loadgen::config;
use pov_loadgen::lifecycle::Shutdown;
use pov_loadgen::scenario::{ErrorInjector, JourneyMetrics, ScenarioRunner, Thresholds};
use pov_loadgen::telemetry;

#[derive(Parser)]
#[command(name = "loadgen")]
#[command(about = "Synthetic user-journey load generator", long_about = None)]
struct Cli {
    /// Run a single iteration and exit.
    #[arg(long)]
    once: bool,

    /// Seed for error injection and fixture selection (deterministic runs).
    #[arg(long)]
    seed: Option<u64>,

    /// Print the end-of-run summary as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let telemetry_config = config::telemetry_from_env()?;
    let _telemetry = telemetry::init_telemetry(&telemetry_config)?;

    let generator_config = config::generator_from_env()?;
    tracing::info!(
        frontend = %generator_config.frontend_base_url,
        flights_api = %generator_config.flights_api_url,
        airlines_api = %generator_config.airlines_api_url,
        error_rate = generator_config.error_rate,
        duration_secs = generator_config.duration_secs,
        interval_secs = generator_config.interval_secs,
        "configuration loaded"
    );

    let injector = match cli.seed {
        Some(seed) => ErrorInjector::with_seed(generator_config.error_rate, seed),
        None => ErrorInjector::new(generator_config.error_rate),
    };

    let mut runner = ScenarioRunner::with_injector(generator_config, injector);
    if cli.once {
        runner = runner.once();
    }
    runner.print_banner();

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();

    let metrics = runner.run(shutdown.subscribe()).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&metrics.summary())?);
    } else {
        print_summary(&metrics);
    }

    let violations = Thresholds::default().violations(&metrics);
    if !violations.is_empty() {
        for violation in &violations {
            eprintln!("threshold violated: {violation}");
        }
        std::process::exit(1);
    }

    Ok(())
}

fn print_summary(metrics: &JourneyMetrics) {
    println!("\n--- Scenario Results ---");
    println!("Total Requests: {}", metrics.requests());
    println!("Checks Sampled: {}", metrics.checks());
    println!("Failed Checks:  {}", metrics.failed_checks());
    println!("Error Rate:     {:.2}%", metrics.error_rate() * 100.0);
    if let Some(p50) = metrics.latency_percentile(0.5) {
        println!("P50 Latency:    {:?}", p50);
    }
    if let Some(p95) = metrics.latency_percentile(0.95) {
        println!("P95 Latency:    {:?}", p95);
    }
    if let Some(p99) = metrics.latency_percentile(0.99) {
        println!("P99 Latency:    {:?}", p99);
    }
    println!("------------------------\n");
}
