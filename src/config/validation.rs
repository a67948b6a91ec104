//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (the loader handles syntactic parsing)
//! - Check base URLs are absolute http(s) URLs
//! - Validate value ranges (error rate within [0, 1], non-zero durations)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GeneratorConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config is handed to the scenario runner

use thiserror::Error;
use url::Url;

use crate::config::schema::GeneratorConfig;

/// A single semantic problem with a configuration value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: {value:?} is not an absolute http(s) URL")]
    InvalidBaseUrl { field: &'static str, value: String },

    #[error("error_rate {0} is outside [0, 1]")]
    ErrorRateOutOfRange(f64),

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
}

/// Validate a generator configuration, collecting every problem found.
pub fn validate_generator(config: &GeneratorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("frontend_base_url", &config.frontend_base_url),
        ("flights_api_url", &config.flights_api_url),
        ("airlines_api_url", &config.airlines_api_url),
    ] {
        if !is_http_base_url(value) {
            errors.push(ValidationError::InvalidBaseUrl {
                field,
                value: value.clone(),
            });
        }
    }

    if !(0.0..=1.0).contains(&config.error_rate) {
        errors.push(ValidationError::ErrorRateOutOfRange(config.error_rate));
    }

    if config.duration_secs == 0 {
        errors.push(ValidationError::ZeroDuration("duration"));
    }
    if config.interval_secs == 0 {
        errors.push(ValidationError::ZeroDuration("interval"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_http_base_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}
