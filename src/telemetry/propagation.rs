//! Trace-context propagation rules.
//!
//! # Responsibilities
//! - Decide which outbound request targets receive trace-correlation headers
//! - Generate W3C `traceparent` values for matching requests
//!
//! # Design Decisions
//! - Ordered allow-list of regex URL matchers, fixed at startup
//! - Covers both the local-development topology and the containerized
//!   topology for the two backend services
//! - Non-matching URLs are left untouched

use rand::Rng;
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Header carrying W3C Trace Context to collaborating backends.
pub const TRACEPARENT: HeaderName = HeaderName::from_static("traceparent");

/// Default allow-list: flights API and airlines API, in their local and
/// containerized incarnations.
const DEFAULT_PATTERNS: [&str; 4] = [
    r"^http://localhost:5001",
    r"^http://localhost:8080",
    r"^http://flights:5001",
    r"^http://airlines:8080",
];

/// Ordered set of URL patterns whose matches carry trace headers.
#[derive(Debug, Clone)]
pub struct PropagationRules {
    matchers: Vec<Regex>,
}

impl PropagationRules {
    /// Compile a rule set from regex patterns, preserving order.
    pub fn new<I, S>(patterns: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let matchers = patterns
            .into_iter()
            .map(|p| Regex::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { matchers })
    }

    /// Whether a request to `url` should carry trace-correlation headers.
    pub fn should_propagate(&self, url: &str) -> bool {
        self.matchers.iter().any(|m| m.is_match(url))
    }

    /// Attach a fresh `traceparent` header when `url` matches the rule set.
    ///
    /// Returns whether a header was attached.
    pub fn inject(&self, url: &str, headers: &mut HeaderMap) -> bool {
        if !self.should_propagate(url) {
            return false;
        }
        match HeaderValue::from_str(&new_traceparent()) {
            Ok(value) => {
                headers.insert(TRACEPARENT, value);
                true
            }
            Err(_) => false,
        }
    }
}

impl Default for PropagationRules {
    fn default() -> Self {
        // The default patterns are known-good literals; compiling them
        // cannot fail.
        Self::new(DEFAULT_PATTERNS).unwrap_or(Self { matchers: Vec::new() })
    }
}

/// Build a sampled W3C traceparent: `00-{trace id}-{span id}-01`.
///
/// An all-zero trace id is invalid per the spec, so one is never emitted.
fn new_traceparent() -> String {
    let mut rng = rand::thread_rng();
    let mut trace_id: u128 = rng.gen();
    if trace_id == 0 {
        trace_id = 1;
    }
    let mut span_id: u64 = rng.gen();
    if span_id == 0 {
        span_id = 1;
    }
    format!("00-{:032x}-{:016x}-01", trace_id, span_id)
}
