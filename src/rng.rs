//! Random source construction for `uclfx`.
//!
//! Generators never reach for an ambient RNG; callers build one here and pass it down.

use anyhow::Context;
use rand::rngs::{OsRng, StdRng};
use rand::SeedableRng;

/// Build a deterministic generator from a `u64` seed.
///
/// The same seed always yields the same fixture sequence for a given `rand` version.
#[must_use]
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Build a generator seeded from OS randomness (`rand::rngs::OsRng`).
///
/// # Errors
/// Returns an error if OS randomness cannot be read.
pub fn from_os() -> anyhow::Result<StdRng> {
    StdRng::from_rng(OsRng).context("read OS randomness")
}

/// Build a generator from an optional seed, falling back to OS randomness.
///
/// # Errors
/// Returns an error if no seed is given and OS randomness cannot be read.
pub fn from_seed_or_os(seed: Option<u64>) -> anyhow::Result<StdRng> {
    seed.map_or_else(from_os, |seed| Ok(seeded(seed)))
}
