//! GOV.UK originator id fixtures: uppercase alphanumeric strings of 3 to 40 characters.

use crate::pick::random_element;
use rand::Rng;

/// Characters an originator id is drawn from.
pub const ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Shortest generated originator id.
pub const MIN_LEN: usize = 3;
/// Longest generated originator id.
pub const MAX_LEN: usize = 40;

/// Generate an originator id whose length is uniform in `MIN_LEN..=MAX_LEN`.
pub fn random_gov_uk_originator_id<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let len = rng.gen_range(MIN_LEN..=MAX_LEN);
    originator_id_of_len(rng, len)
}

/// Generate an originator-style id of exactly `len` characters.
///
/// `len` is not clamped; callers wanting a contract-valid id keep it in `MIN_LEN..=MAX_LEN`.
pub fn originator_id_of_len<R>(rng: &mut R, len: usize) -> String
where
    R: Rng + ?Sized,
{
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        if let Some(&b) = random_element(rng, ALPHABET) {
            out.push(char::from(b));
        }
    }
    out
}

/// Whether `value` satisfies the originator id contract (length and alphabet).
#[must_use]
pub fn is_originator_id(value: &str) -> bool {
    (MIN_LEN..=MAX_LEN).contains(&value.len()) && value.bytes().all(|b| ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::ensure;
    use rand::rngs::mock::StepRng;

    #[test]
    fn zero_source_yields_shortest_first_letter_id() -> anyhow::Result<()> {
        let mut rng = StepRng::new(0, 0);
        ensure!(random_gov_uk_originator_id(&mut rng) == "AAA");
        ensure!(originator_id_of_len(&mut rng, 5) == "AAAAA");
        ensure!(originator_id_of_len(&mut rng, 0).is_empty());
        Ok(())
    }

    #[test]
    fn generated_ids_cover_the_length_range() -> anyhow::Result<()> {
        let mut rng = crate::rng::seeded(7);
        let mut shortest = usize::MAX;
        let mut longest = 0;
        for _ in 0..5_000 {
            let id = random_gov_uk_originator_id(&mut rng);
            ensure!(is_originator_id(&id), "bad originator id: {id}");
            shortest = shortest.min(id.len());
            longest = longest.max(id.len());
        }
        ensure!(shortest == MIN_LEN, "shortest seen: {shortest}");
        ensure!(longest == MAX_LEN, "longest seen: {longest}");
        Ok(())
    }

    #[test]
    fn contract_check_rejects_bad_ids() -> anyhow::Result<()> {
        ensure!(is_originator_id("AB1"));
        ensure!(!is_originator_id("AB"));
        ensure!(!is_originator_id(&"A".repeat(41)));
        ensure!(!is_originator_id("ab1"));
        ensure!(!is_originator_id("AB-1"));
        Ok(())
    }
}
