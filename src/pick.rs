//! Uniform selection from fixed, ordered sets.

use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one element of `items` uniformly at random.
///
/// Returns `None` when `items` is empty.
pub fn random_element<'a, T, R>(rng: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}

/// A closed set of labelled values that can be drawn at random.
pub trait Choice: Copy + 'static {
    /// Every variant, in declaration order. Implementors assert it is non-empty.
    const ALL: &'static [Self];

    /// The wire label of this value.
    fn label(self) -> &'static str;
}

/// Pick one variant of `T` uniformly at random.
#[allow(clippy::indexing_slicing)]
pub fn random_choice<T, R>(rng: &mut R) -> T
where
    T: Choice,
    R: Rng + ?Sized,
{
    // ALL is non-empty for every implementor.
    T::ALL[rng.gen_range(0..T::ALL.len())]
}
