//! Fixed sample data parameterizing each iteration's requests.

/// Airline codes the flights API knows about.
pub const AIRLINES: [&str; 3] = ["AA", "UA", "DL"];

/// Passenger names used for booking requests.
pub const PASSENGERS: [&str; 2] = ["John Doe", "Jane Doe"];

/// Flight numbers used for booking requests.
pub const FLIGHT_NUMBERS: [&str; 6] = ["101", "202", "303", "404", "505", "606"];

/// Pick one element uniformly at random.
pub fn pick<'a>(rng: &mut fastrand::Rng, set: &[&'a str]) -> &'a str {
    set[rng.usize(..set.len())]
}
