//! Scenario metrics.
//!
//! # Responsibilities
//! - Aggregate per-run counters: requests issued, failed checks, latencies
//! - Mirror updates into the `metrics` recorder for Prometheus exposition
//! - Evaluate pass/fail thresholds at run end
//!
//! # Metrics
//! - `loadgen_requests_total` (counter): every request issued
//! - `loadgen_check_failures_total` (counter): failed backend-API checks
//! - `loadgen_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - The aggregator is an owned value passed `&mut` through the journey;
//!   the single virtual user is the sole writer, so no locking
//! - The error rate samples only the backend API calls, never the
//!   frontend page loads

use std::time::Duration;

use serde::Serialize;

/// Per-run aggregation of the scenario's results.
#[derive(Debug, Default)]
pub struct JourneyMetrics {
    requests: u64,
    checks: u64,
    failed_checks: u64,
    latencies: Vec<Duration>,
}

impl JourneyMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one issued request and its wall-clock duration.
    pub fn record_request(&mut self, latency: Duration) {
        self.requests += 1;
        self.latencies.push(latency);
        metrics::counter!("loadgen_requests_total").increment(1);
        metrics::histogram!("loadgen_request_duration_seconds").record(latency.as_secs_f64());
    }

    /// Record the outcome of one backend-API check.
    pub fn record_check(&mut self, passed: bool) {
        self.checks += 1;
        if !passed {
            self.failed_checks += 1;
            metrics::counter!("loadgen_check_failures_total").increment(1);
        }
    }

    /// Total requests issued.
    pub fn requests(&self) -> u64 {
        self.requests
    }

    /// Backend-API checks sampled so far.
    pub fn checks(&self) -> u64 {
        self.checks
    }

    /// Failed backend-API checks.
    pub fn failed_checks(&self) -> u64 {
        self.failed_checks
    }

    /// Fraction of backend-API checks that failed; 0 when nothing sampled.
    pub fn error_rate(&self) -> f64 {
        if self.checks == 0 {
            0.0
        } else {
            self.failed_checks as f64 / self.checks as f64
        }
    }

    /// Latency percentile over all recorded requests, `p` in [0, 1].
    pub fn latency_percentile(&self, p: f64) -> Option<Duration> {
        if self.latencies.is_empty() {
            return None;
        }
        let mut sorted = self.latencies.clone();
        sorted.sort();
        let index = ((sorted.len() as f64 * p) as usize).min(sorted.len() - 1);
        Some(sorted[index])
    }

    /// Snapshot for reporting.
    pub fn summary(&self) -> Summary {
        Summary {
            requests: self.requests,
            checks: self.checks,
            failed_checks: self.failed_checks,
            error_rate: self.error_rate(),
            p50_ms: self.latency_percentile(0.5).map(|d| d.as_millis() as u64),
            p95_ms: self.latency_percentile(0.95).map(|d| d.as_millis() as u64),
            p99_ms: self.latency_percentile(0.99).map(|d| d.as_millis() as u64),
        }
    }
}

/// Serializable end-of-run report.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub requests: u64,
    pub checks: u64,
    pub failed_checks: u64,
    pub error_rate: f64,
    pub p50_ms: Option<u64>,
    pub p95_ms: Option<u64>,
    pub p99_ms: Option<u64>,
}

/// Pass/fail criteria evaluated by the hosting executor at run end.
#[derive(Debug, Clone)]
pub struct Thresholds {
    /// p95 request duration must stay under this.
    pub p95_max: Duration,

    /// Failed-check rate must stay under this.
    pub error_rate_max: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            p95_max: Duration::from_millis(2000),
            error_rate_max: 0.5,
        }
    }
}

impl Thresholds {
    /// Every threshold the run violated; empty means the run passed.
    pub fn violations(&self, metrics: &JourneyMetrics) -> Vec<String> {
        let mut violations = Vec::new();

        if let Some(p95) = metrics.latency_percentile(0.95) {
            if p95 >= self.p95_max {
                violations.push(format!(
                    "p95 request duration {:?} exceeds {:?}",
                    p95, self.p95_max
                ));
            }
        }

        if metrics.error_rate() >= self.error_rate_max {
            violations.push(format!(
                "error rate {:.2} exceeds {:.2}",
                metrics.error_rate(),
                self.error_rate_max
            ));
        }

        violations
    }
}
