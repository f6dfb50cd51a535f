//! National Insurance number (NINO) shaped fixtures.
//!
//! Valid-shaped values are `AA` followed by a zero-padded 6-digit number. Invalid-shaped
//! values use the `ZZ` prefix (outside the NINO prefix alphabet) with 8 digits, or the
//! fixed literal [`INVALID_NINO`].

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Prefix of valid-shaped NINO fixtures.
pub const NINO_PREFIX: &str = "AA";
/// Zero-pad width of the numeric part of valid-shaped NINO fixtures.
pub const NINO_DIGITS: usize = 6;
/// Exclusive upper limit representable in [`NINO_DIGITS`] digits.
const NINO_LIMIT: u32 = 1_000_000;

/// Prefix of random invalid NINO fixtures.
pub const INVALID_NINO_PREFIX: &str = "ZZ";
/// Zero-pad width of the numeric part of random invalid NINO fixtures.
pub const INVALID_NINO_DIGITS: usize = 8;
/// Exclusive upper bound of the numeric part of random invalid NINO fixtures.
const INVALID_NINO_BOUND: u32 = 100_000_000;

/// Fixed malformed NINO for cases where a static invalid value suffices.
pub const INVALID_NINO: &str = "QQ1234567890";

/// Which numeric range a valid-shaped NINO draws from.
///
/// Both ranges fit in [`NINO_DIGITS`] digits, so output is always `AA` + 6 digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum NinoVariant {
    /// Number drawn from `0..1_000_000`.
    #[default]
    Standard,
    /// Number drawn from `0..100_000` (always at least one leading zero).
    Legacy,
}

impl NinoVariant {
    /// Exclusive upper bound of the numeric part.
    #[must_use]
    pub const fn bound(self) -> u32 {
        match self {
            Self::Standard => 1_000_000,
            Self::Legacy => 100_000,
        }
    }
}

const _: () = assert!(NinoVariant::Standard.bound() <= NINO_LIMIT);
const _: () = assert!(NinoVariant::Legacy.bound() <= NINO_LIMIT);

/// Generate a valid-shaped NINO using [`NinoVariant::Standard`].
pub fn random_nino<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    random_nino_with(rng, NinoVariant::Standard)
}

/// Generate a valid-shaped NINO drawing its number from `variant`'s range.
pub fn random_nino_with<R>(rng: &mut R, variant: NinoVariant) -> String
where
    R: Rng + ?Sized,
{
    let number = rng.gen_range(0..variant.bound());
    format!("{NINO_PREFIX}{number:0width$}", width = NINO_DIGITS)
}

/// Generate a random invalid NINO: `ZZ` followed by exactly 8 digits.
pub fn random_invalid_nino<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let number = rng.gen_range(0..INVALID_NINO_BOUND);
    format!(
        "{INVALID_NINO_PREFIX}{number:0width$}",
        width = INVALID_NINO_DIGITS
    )
}

fn prefixed_digits(value: &str, prefix: &str, digits: usize) -> bool {
    value.strip_prefix(prefix).is_some_and(|rest| {
        rest.len() == digits && rest.bytes().all(|b| b.is_ascii_digit())
    })
}

/// Whether `value` has the shape produced by [`random_nino_with`].
#[must_use]
pub fn is_nino_shaped(value: &str) -> bool {
    prefixed_digits(value, NINO_PREFIX, NINO_DIGITS)
}

/// Whether `value` has the shape produced by [`random_invalid_nino`].
#[must_use]
pub fn is_invalid_nino_shaped(value: &str) -> bool {
    prefixed_digits(value, INVALID_NINO_PREFIX, INVALID_NINO_DIGITS)
}
