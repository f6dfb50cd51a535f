//! Bundled liability request fixtures.
//!
//! A [`LiabilityFixture`] carries one value from each generator, which is what a single
//! liability API request needs.

use crate::nino::{self, NinoVariant};
use crate::originator;
use crate::universal_credit::{self, Action, RecordType};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Knobs for bundled fixture generation. The default draws every field at random.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixtureOptions {
    /// Numeric range for valid-shaped NINOs.
    pub variant: NinoVariant,
    /// Use a random `ZZ` invalid NINO instead of a valid-shaped one.
    pub invalid_nino: bool,
    /// Pin the record type instead of drawing it.
    pub record_type: Option<RecordType>,
    /// Pin the action instead of drawing it.
    pub action: Option<Action>,
}

/// One complete set of liability request inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiabilityFixture {
    /// NINO-shaped identifier (valid or deliberately invalid shape).
    pub nino: String,
    /// GOV.UK originator id.
    pub originator_id: String,
    /// Record type label.
    pub record_type: RecordType,
    /// Action label.
    pub action: Action,
}

/// Generate one liability fixture.
pub fn generate<R>(rng: &mut R, opts: FixtureOptions) -> LiabilityFixture
where
    R: Rng + ?Sized,
{
    let nino = if opts.invalid_nino {
        nino::random_invalid_nino(rng)
    } else {
        nino::random_nino_with(rng, opts.variant)
    };
    LiabilityFixture {
        nino,
        originator_id: originator::random_gov_uk_originator_id(rng),
        record_type: opts
            .record_type
            .unwrap_or_else(|| universal_credit::random_universal_credit_record_type(rng)),
        action: opts
            .action
            .unwrap_or_else(|| universal_credit::random_universal_credit_action(rng)),
    }
}

/// Generate `count` independent liability fixtures from the same source.
///
/// The whole batch is allocated up front; the CLI caps `count` before calling this.
pub fn generate_batch<R>(rng: &mut R, opts: FixtureOptions, count: usize) -> Vec<LiabilityFixture>
where
    R: Rng + ?Sized,
{
    (0..count).map(|_| generate(rng, opts)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::ensure;
    use rand::rngs::mock::StepRng;

    #[test]
    fn zero_source_fixture() -> anyhow::Result<()> {
        let mut rng = StepRng::new(0, 0);
        let fx = generate(&mut rng, FixtureOptions::default());
        ensure!(fx.nino == "AA000000");
        ensure!(fx.originator_id == "AAA");
        ensure!(fx.record_type == RecordType::Uc);
        ensure!(fx.action == Action::Insert);

        let bad = generate(
            &mut rng,
            FixtureOptions {
                invalid_nino: true,
                ..FixtureOptions::default()
            },
        );
        ensure!(bad.nino == "ZZ00000000");
        Ok(())
    }

    #[test]
    fn batch_is_reproducible_for_a_seed() -> anyhow::Result<()> {
        let opts = FixtureOptions {
            variant: NinoVariant::Legacy,
            ..FixtureOptions::default()
        };
        let a = generate_batch(&mut crate::rng::seeded(5), opts, 20);
        let b = generate_batch(&mut crate::rng::seeded(5), opts, 20);
        ensure!(a.len() == 20);
        ensure!(a == b);
        for fx in &a {
            ensure!(nino::is_nino_shaped(&fx.nino));
            ensure!(originator::is_originator_id(&fx.originator_id));
        }
        ensure!(generate_batch(&mut crate::rng::seeded(5), opts, 0).is_empty());
        Ok(())
    }

    #[test]
    fn pinned_labels_are_kept() -> anyhow::Result<()> {
        let opts = FixtureOptions {
            record_type: Some(RecordType::LcwLcwra),
            action: Some(Action::Terminate),
            ..FixtureOptions::default()
        };
        for fx in generate_batch(&mut crate::rng::seeded(11), opts, 50) {
            ensure!(fx.record_type == RecordType::LcwLcwra);
            ensure!(fx.action == Action::Terminate);
        }
        Ok(())
    }

    #[test]
    fn serializes_with_wire_labels() -> anyhow::Result<()> {
        let fx = LiabilityFixture {
            nino: "AA012345".to_string(),
            originator_id: "ABC123".to_string(),
            record_type: RecordType::LcwLcwra,
            action: Action::Terminate,
        };
        let value = serde_json::to_value(&fx)?;
        let field = |key: &str| value.get(key).and_then(serde_json::Value::as_str);
        ensure!(field("record_type") == Some("LCW/LCWRA"));
        ensure!(field("action") == Some("Terminate"));
        ensure!(field("nino") == Some("AA012345"));
        ensure!(field("originator_id") == Some("ABC123"));
        Ok(())
    }
}
