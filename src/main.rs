#![allow(clippy::print_stderr, clippy::print_stdout)]

//! CLI entrypoint for `uclfx` (Universal Credit Liability fixture generators).
//!
//! The generators live in the `uclfx` library crate (`src/nino.rs`, `src/originator.rs`, etc).

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use uclfx::fixture::{self, FixtureOptions};
use uclfx::nino::{self, NinoVariant};
use uclfx::originator;
use uclfx::rng;
use uclfx::universal_credit::{self, Action, RecordType};

const SEED_ENV: &str = "UCLFX_SEED";
const MAX_COUNT: u64 = 100_000;

#[derive(Parser)]
#[command(
    name = "uclfx",
    version,
    about = "Universal Credit Liability test fixture generators",
    long_about = "Universal Credit Liability test fixture generators.\n\n\
Each subcommand prints freshly generated fixture values, one per line.\n\
Use `--json` for machine-readable output and `--seed` for reproducible runs.",
    after_long_help = r#"Environment variables (optional; only read when `--use-env` is passed):
  UCLFX_SEED  u64 seed used when `--seed` is not given (default: OS randomness)

Examples:
  uclfx nino
  uclfx nino --variant legacy --count 5
  uclfx nino --invalid
  uclfx originator-id --len 40
  uclfx liability --count 3 --seed 42 --json
  uclfx liability --record-type LCW/LCWRA --action Terminate
"#
)]
struct Cli {
    #[arg(
        long,
        global = true,
        default_value_t = false,
        help = "Emit pretty JSON (suitable for scripting)."
    )]
    json: bool,
    #[arg(
        long,
        global = true,
        value_name = "U64",
        help = "Seed the random source for a reproducible run (default: OS randomness)."
    )]
    seed: Option<u64>,
    #[arg(
        long,
        global = true,
        default_value_t = false,
        help = "Read UCLFX_* environment variables for default values (opt-in)."
    )]
    use_env: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CountArgs {
    #[arg(
        long,
        default_value_t = 1,
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(0..=MAX_COUNT),
        help = "Number of values to generate (at most 100000)."
    )]
    count: u64,
}

impl CountArgs {
    fn get(&self) -> anyhow::Result<usize> {
        usize::try_from(self.count)
            .with_context(|| format!("--count {} is too large", self.count))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate NINO-shaped values (`AA` + 6 digits), or invalid ones.
    Nino {
        #[command(flatten)]
        count: CountArgs,
        #[arg(
            long,
            value_enum,
            default_value_t = NinoVariant::Standard,
            value_name = "VARIANT",
            help = "Numeric range of the 6-digit part."
        )]
        variant: NinoVariant,
        #[arg(
            long,
            conflicts_with = "fixed",
            help = "Generate `ZZ` + 8 digits instead (outside the NINO prefix alphabet)."
        )]
        invalid: bool,
        #[arg(
            long,
            conflicts_with = "variant",
            help = "Print the fixed malformed NINO `QQ1234567890` (repeated `--count` times)."
        )]
        fixed: bool,
    },
    /// Generate GOV.UK originator ids (`[A-Z0-9]{3,40}`).
    OriginatorId {
        #[command(flatten)]
        count: CountArgs,
        #[arg(
            long,
            value_name = "N",
            help = "Force the id length (must be within 3..=40; default: random)."
        )]
        len: Option<usize>,
    },
    /// Pick record types (`UC` or `LCW/LCWRA`).
    RecordType {
        #[command(flatten)]
        count: CountArgs,
    },
    /// Pick actions (`Insert` or `Terminate`).
    Action {
        #[command(flatten)]
        count: CountArgs,
    },
    /// Generate complete liability fixtures (nino, originator id, record type, action).
    Liability {
        #[command(flatten)]
        count: CountArgs,
        #[arg(
            long,
            value_enum,
            default_value_t = NinoVariant::Standard,
            value_name = "VARIANT",
            help = "Numeric range of the NINO 6-digit part."
        )]
        variant: NinoVariant,
        #[arg(long, help = "Use a random `ZZ` invalid NINO in each fixture.")]
        invalid_nino: bool,
        #[arg(
            long,
            value_enum,
            value_name = "TYPE",
            help = "Pin the record type (default: random)."
        )]
        record_type: Option<RecordType>,
        #[arg(
            long,
            value_enum,
            value_name = "ACTION",
            help = "Pin the action (default: random)."
        )]
        action: Option<Action>,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:?}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let json = cli.json;
    let seed = resolve_seed(cli.seed, cli.use_env)?;
    let mut rng = rng::from_seed_or_os(seed)?;

    match cli.command {
        Commands::Nino {
            count,
            variant,
            invalid,
            fixed,
        } => {
            let values = repeat(count.get()?, || {
                if fixed {
                    nino::INVALID_NINO.to_string()
                } else if invalid {
                    nino::random_invalid_nino(&mut rng)
                } else {
                    nino::random_nino_with(&mut rng, variant)
                }
            });
            write_values(json, &values)?;
        }
        Commands::OriginatorId { count, len } => {
            let values = match len {
                Some(len) => {
                    anyhow::ensure!(
                        (originator::MIN_LEN..=originator::MAX_LEN).contains(&len),
                        "--len must be within {}..={}, got {len}",
                        originator::MIN_LEN,
                        originator::MAX_LEN
                    );
                    repeat(count.get()?, || {
                        originator::originator_id_of_len(&mut rng, len)
                    })
                }
                None => repeat(count.get()?, || {
                    originator::random_gov_uk_originator_id(&mut rng)
                }),
            };
            write_values(json, &values)?;
        }
        Commands::RecordType { count } => {
            let values = repeat(count.get()?, || {
                universal_credit::random_universal_credit_record_type(&mut rng)
            });
            write_values(json, &values)?;
        }
        Commands::Action { count } => {
            let values = repeat(count.get()?, || {
                universal_credit::random_universal_credit_action(&mut rng)
            });
            write_values(json, &values)?;
        }
        Commands::Liability {
            count,
            variant,
            invalid_nino,
            record_type,
            action,
        } => {
            let opts = FixtureOptions {
                variant,
                invalid_nino,
                record_type,
                action,
            };
            let fixtures = fixture::generate_batch(&mut rng, opts, count.get()?);
            if json {
                write_json_values(&fixtures)?;
            } else {
                let mut stdout = std::io::stdout();
                for fx in &fixtures {
                    let line = serde_json::to_string(fx).context("serialize")?;
                    writeln!(stdout, "{line}").context("write stdout")?;
                }
            }
        }
    }

    Ok(())
}

fn resolve_seed(seed: Option<u64>, use_env: bool) -> anyhow::Result<Option<u64>> {
    if seed.is_some() || !use_env {
        return Ok(seed);
    }
    let Some(raw) = std::env::var(SEED_ENV).ok() else {
        return Ok(None);
    };
    let parsed = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("parse {SEED_ENV}={raw:?} as u64"))?;
    Ok(Some(parsed))
}

fn repeat<T>(count: usize, mut f: impl FnMut() -> T) -> Vec<T> {
    (0..count).map(|_| f()).collect()
}

fn write_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    let raw = serde_json::to_string_pretty(value).context("serialize JSON")?;
    stdout.write_all(raw.as_bytes()).context("write stdout")?;
    stdout.write_all(b"\n").context("write stdout newline")?;
    Ok(())
}

/// A single value is emitted bare; more than one as a JSON array.
fn write_json_values<T: Serialize>(values: &[T]) -> anyhow::Result<()> {
    match values {
        [one] => write_json(one),
        _ => write_json(values),
    }
}

fn write_values<T: Serialize + std::fmt::Display>(json: bool, values: &[T]) -> anyhow::Result<()> {
    if json {
        return write_json_values(values);
    }
    let mut stdout = std::io::stdout();
    for value in values {
        writeln!(stdout, "{value}").context("write stdout")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::ensure;

    #[test]
    fn resolve_seed_prefers_flag_and_ignores_env_without_opt_in() -> anyhow::Result<()> {
        ensure!(resolve_seed(Some(3), true)? == Some(3));
        ensure!(resolve_seed(Some(3), false)? == Some(3));
        ensure!(resolve_seed(None, false)?.is_none());
        Ok(())
    }

    #[test]
    fn repeat_calls_generator_count_times() -> anyhow::Result<()> {
        let mut calls = 0;
        let out = repeat(4, || {
            calls += 1;
            calls
        });
        ensure!(out == vec![1, 2, 3, 4]);
        ensure!(repeat(0, || 1).is_empty());
        Ok(())
    }

    #[test]
    fn count_is_capped() -> anyhow::Result<()> {
        ensure!(Cli::try_parse_from(["uclfx", "action", "--count", "100000"]).is_ok());
        ensure!(Cli::try_parse_from(["uclfx", "action", "--count", "100001"]).is_err());
        ensure!(
            Cli::try_parse_from(["uclfx", "action", "--count", "18446744073709551615"]).is_err()
        );
        ensure!(CountArgs { count: MAX_COUNT }.get()? == 100_000);
        Ok(())
    }

    #[test]
    fn cli_rejects_conflicting_nino_modes() -> anyhow::Result<()> {
        ensure!(Cli::try_parse_from(["uclfx", "nino", "--invalid", "--fixed"]).is_err());
        ensure!(Cli::try_parse_from(["uclfx", "nino", "--variant", "legacy"]).is_ok());
        ensure!(
            Cli::try_parse_from(["uclfx", "nino", "--fixed", "--variant", "legacy"]).is_err()
        );
        ensure!(Cli::try_parse_from(["uclfx", "nino", "--fixed", "--count", "2"]).is_ok());
        ensure!(Cli::try_parse_from(["uclfx", "action", "--count", "3", "--json"]).is_ok());
        ensure!(
            Cli::try_parse_from(["uclfx", "liability", "--record-type", "LCW/LCWRA"]).is_ok()
        );
        ensure!(Cli::try_parse_from(["uclfx", "liability", "--action", "Delete"]).is_err());
        Ok(())
    }
}
