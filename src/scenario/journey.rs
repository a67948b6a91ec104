//! One synthetic user journey.
//!
//! A fixed, ordered sequence of six HTTP calls across the frontend and the
//! two backend APIs. The order never varies; the only randomness is which
//! fixture values are used and whether a backend call asks for an injected
//! error.

use std::time::Instant;

use reqwest::{Client, Method};

use crate::config::schema::GeneratorConfig;
use crate::scenario::fixtures;
use crate::scenario::injector::ErrorInjector;
use crate::scenario::metrics::JourneyMetrics;

/// Run one full iteration of the user journey.
///
/// Every step records a request; steps 3, 4 and 6 (the backend API calls)
/// additionally sample the error-rate metric. A failed check never aborts
/// the iteration.
pub async fn run_iteration(
    client: &Client,
    config: &GeneratorConfig,
    injector: &mut ErrorInjector,
    metrics: &mut JourneyMetrics,
) {
    // 1. Frontend home page
    let url = format!("{}/", config.frontend_base_url);
    check_request(client, Method::GET, &url, metrics).await;

    // 2. Frontend flights page
    let url = format!("{}/flights", config.frontend_base_url);
    check_request(client, Method::GET, &url, metrics).await;

    // 3. Flights API: list flights for a random airline
    let airline = fixtures::pick(injector.rng(), &fixtures::AIRLINES);
    let mut url = format!("{}/flights/{}", config.flights_api_url, airline);
    if injector.should_inject() {
        url.push_str("?raise=500");
    }
    let passed = check_request(client, Method::GET, &url, metrics).await;
    metrics.record_check(passed);

    // 4. Flights API: book a flight
    let passenger = fixtures::pick(injector.rng(), &fixtures::PASSENGERS);
    let flight_num = fixtures::pick(injector.rng(), &fixtures::FLIGHT_NUMBERS);
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("passenger_name", passenger)
        .append_pair("flight_num", flight_num)
        .finish();
    let mut url = format!("{}/flight?{}", config.flights_api_url, query);
    if injector.should_inject() {
        url.push_str("&raise=500");
    }
    let passed = check_request(client, Method::POST, &url, metrics).await;
    metrics.record_check(passed);

    // 5. Frontend airlines page
    let url = format!("{}/airlines", config.frontend_base_url);
    check_request(client, Method::GET, &url, metrics).await;

    // 6. Airlines API: list airlines
    let mut url = format!("{}/airlines", config.airlines_api_url);
    if injector.should_inject() {
        url.push_str("?raise=true");
    }
    let passed = check_request(client, Method::GET, &url, metrics).await;
    metrics.record_check(passed);
}

/// Issue one request and check it, recording the attempt.
///
/// A transport error and a non-success status fail the check identically;
/// neither is fatal to the run.
async fn check_request(
    client: &Client,
    method: Method,
    url: &str,
    metrics: &mut JourneyMetrics,
) -> bool {
    let start = Instant::now();
    let outcome = client.request(method.clone(), url).send().await;
    let latency = start.elapsed();
    metrics.record_request(latency);

    match outcome {
        Ok(response) => {
            let passed = response.status().is_success();
            if passed {
                tracing::debug!(%method, url, status = %response.status(), ?latency, "check passed");
            } else {
                tracing::warn!(%method, url, status = %response.status(), "check failed: non-success status");
            }
            passed
        }
        Err(error) => {
            tracing::warn!(%method, url, %error, "check failed: transport error");
            false
        }
    }
}
