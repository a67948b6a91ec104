//! Deliberate backend-error injection.
//!
//! Each call site draws independently, so one injected failure never
//! implies another within the same iteration.

/// Seedable source of error-injection decisions and fixture picks.
#[derive(Debug)]
pub struct ErrorInjector {
    rate: f64,
    rng: fastrand::Rng,
}

impl ErrorInjector {
    /// Injector with an OS-seeded generator.
    pub fn new(rate: f64) -> Self {
        Self {
            rate,
            rng: fastrand::Rng::new(),
        }
    }

    /// Injector with a fixed seed, for deterministic runs.
    pub fn with_seed(rate: f64, seed: u64) -> Self {
        Self {
            rate,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Configured injection probability.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// One independent draw: should this call ask the backend to fail?
    pub fn should_inject(&mut self) -> bool {
        self.rng.f64() < self.rate
    }

    /// The underlying generator, shared with fixture selection.
    pub fn rng(&mut self) -> &mut fastrand::Rng {
        &mut self.rng
    }
}
