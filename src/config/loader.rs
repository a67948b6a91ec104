//! Configuration loading from the process environment.
//!
//! Every option has a default; a variable that is present but malformed is
//! a load-time error rather than a silent fallback.

use thiserror::Error;

use crate::config::schema::{GeneratorConfig, TelemetryConfig};
use crate::config::validation::{validate_generator, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate the generator configuration from the environment.
pub fn generator_from_env() -> Result<GeneratorConfig, ConfigError> {
    generator_from_lookup(|var| std::env::var(var).ok())
}

/// Load and validate the generator configuration from an arbitrary lookup.
///
/// The indirection lets tests supply a map instead of mutating the process
/// environment.
pub fn generator_from_lookup<F>(lookup: F) -> Result<GeneratorConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = GeneratorConfig::default();

    let config = GeneratorConfig {
        frontend_base_url: base_url(&lookup, "FRONTEND_BASE_URL", defaults.frontend_base_url),
        flights_api_url: base_url(&lookup, "FLIGHTS_API_URL", defaults.flights_api_url),
        airlines_api_url: base_url(&lookup, "AIRLINES_API_URL", defaults.airlines_api_url),
        error_rate: match lookup("ERROR_RATE") {
            Some(raw) => raw.parse::<f64>().map_err(|e| ConfigError::Invalid {
                var: "ERROR_RATE",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.error_rate,
        },
        duration_secs: match lookup("DURATION") {
            // "0" is a sentinel: run for 24 hours, letting an external
            // orchestrator restart the process for continuous operation.
            Some(raw) if raw.trim() == "0" => 24 * 60 * 60,
            Some(raw) => parse_seconds("DURATION", &raw)?,
            None => defaults.duration_secs,
        },
        interval_secs: match lookup("INTERVAL") {
            Some(raw) => parse_seconds("INTERVAL", &raw)?,
            None => defaults.interval_secs,
        },
    };

    validate_generator(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load the telemetry configuration from the environment.
pub fn telemetry_from_env() -> Result<TelemetryConfig, ConfigError> {
    telemetry_from_lookup(|var| std::env::var(var).ok())
}

/// Load the telemetry configuration from an arbitrary lookup.
pub fn telemetry_from_lookup<F>(lookup: F) -> Result<TelemetryConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = TelemetryConfig::default();

    Ok(TelemetryConfig {
        collector_url: lookup("COLLECTOR_URL").unwrap_or(defaults.collector_url),
        environment: lookup("DEPLOYMENT_ENV").unwrap_or(defaults.environment),
        metrics_address: lookup("METRICS_ADDRESS"),
    })
}

fn base_url<F>(lookup: &F, var: &'static str, default: String) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|raw| raw.trim_end_matches('/').to_string())
        .unwrap_or(default)
}

/// Parse a duration in seconds, accepting an optional trailing `s`.
fn parse_seconds(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('s');
    trimmed.parse::<u64>().map_err(|e| ConfigError::Invalid {
        var,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |var| map.get(var).map(|v| v.to_string())
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = generator_from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.frontend_base_url, "http://frontend:3000");
        assert_eq!(config.flights_api_url, "http://flights:5001");
        assert_eq!(config.airlines_api_url, "http://airlines:8080");
        assert_eq!(config.error_rate, 0.1);
        assert_eq!(config.duration_secs, 60);
        assert_eq!(config.interval_secs, 30);
    }

    #[test]
    fn duration_zero_means_twenty_four_hours() {
        let config = generator_from_lookup(lookup(&[("DURATION", "0")])).unwrap();
        assert_eq!(config.duration_secs, 86_400);
    }

    #[test]
    fn duration_accepts_plain_and_suffixed_seconds() {
        let config = generator_from_lookup(lookup(&[("DURATION", "120")])).unwrap();
        assert_eq!(config.duration_secs, 120);

        let config = generator_from_lookup(lookup(&[("DURATION", "45s")])).unwrap();
        assert_eq!(config.duration_secs, 45);
    }

    #[test]
    fn interval_overrides_default() {
        let config = generator_from_lookup(lookup(&[("INTERVAL", "5")])).unwrap();
        assert_eq!(config.interval_secs, 5);
    }

    #[test]
    fn base_urls_are_stored_without_trailing_slash() {
        let config =
            generator_from_lookup(lookup(&[("FRONTEND_BASE_URL", "http://localhost:3000/")]))
                .unwrap();
        assert_eq!(config.frontend_base_url, "http://localhost:3000");
    }

    #[test]
    fn malformed_error_rate_is_an_error() {
        let err = generator_from_lookup(lookup(&[("ERROR_RATE", "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "ERROR_RATE", .. }));
    }

    #[test]
    fn out_of_range_error_rate_fails_validation() {
        let err = generator_from_lookup(lookup(&[("ERROR_RATE", "1.5")])).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn malformed_duration_is_an_error() {
        let err = generator_from_lookup(lookup(&[("DURATION", "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "DURATION", .. }));
    }

    #[test]
    fn telemetry_defaults_and_overrides() {
        let config = telemetry_from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.collector_url, "http://localhost:12347/collect");
        assert_eq!(config.environment, "production");
        assert!(config.metrics_address.is_none());

        let config = telemetry_from_lookup(lookup(&[
            ("COLLECTOR_URL", "http://alloy:12347/collect"),
            ("DEPLOYMENT_ENV", "staging"),
            ("METRICS_ADDRESS", "127.0.0.1:9091"),
        ]))
        .unwrap();
        assert_eq!(config.collector_url, "http://alloy:12347/collect");
        assert_eq!(config.environment, "staging");
        assert_eq!(config.metrics_address.as_deref(), Some("127.0.0.1:9091"));
    }
}
