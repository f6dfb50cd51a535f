//! `uclfx` is a small library backing the `uclfx` CLI binary.
//!
//! It manufactures randomized fixture values for Universal Credit Liability API tests:
//! - NINO-shaped identifiers (valid shape, random invalid shape, fixed invalid literal)
//! - GOV.UK originator ids
//! - record type and action labels
//! - bundled liability fixtures combining all of the above
//!
//! Every generator takes the random source as an explicit `&mut impl Rng`, so callers
//! decide between a seeded generator (reproducible runs) and an OS-seeded one.

/// Bundled liability request fixtures.
pub mod fixture;
/// National Insurance number shaped values.
pub mod nino;
/// GOV.UK originator id generation.
pub mod originator;
/// Uniform selection from fixed sets.
pub mod pick;
/// Construction of the injected random source.
pub mod rng;
/// Universal Credit record type and action labels.
pub mod universal_credit;
