//! Universal Credit liability labels: record types and actions.

use crate::pick::{random_choice, Choice};
use clap::builder::PossibleValue;
use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Kind of liability record being submitted.
pub enum RecordType {
    /// Universal Credit.
    #[serde(rename = "UC")]
    Uc,
    /// Limited capability for work (and work-related activity).
    #[serde(rename = "LCW/LCWRA")]
    LcwLcwra,
}

impl Choice for RecordType {
    const ALL: &'static [Self] = &[Self::Uc, Self::LcwLcwra];

    fn label(self) -> &'static str {
        match self {
            Self::Uc => "UC",
            Self::LcwLcwra => "LCW/LCWRA",
        }
    }
}

const _: () = assert!(!RecordType::ALL.is_empty());

impl ValueEnum for RecordType {
    fn value_variants<'a>() -> &'a [Self] {
        Self::ALL
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let pv = match self {
            Self::Uc => PossibleValue::new("UC").help("Universal Credit"),
            Self::LcwLcwra => PossibleValue::new("LCW/LCWRA").help("Limited capability for work"),
        };
        Some(pv)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for RecordType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            s if s.eq_ignore_ascii_case("UC") => Ok(Self::Uc),
            s if s.eq_ignore_ascii_case("LCW/LCWRA") => Ok(Self::LcwLcwra),
            _ => Err(anyhow::anyhow!("invalid RecordType: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// What the request does to a liability.
pub enum Action {
    /// Create a new liability.
    Insert,
    /// End an existing liability.
    Terminate,
}

impl Choice for Action {
    const ALL: &'static [Self] = &[Self::Insert, Self::Terminate];

    fn label(self) -> &'static str {
        match self {
            Self::Insert => "Insert",
            Self::Terminate => "Terminate",
        }
    }
}

const _: () = assert!(!Action::ALL.is_empty());

impl ValueEnum for Action {
    fn value_variants<'a>() -> &'a [Self] {
        Self::ALL
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let pv = match self {
            Self::Insert => PossibleValue::new("Insert").help("Create a liability"),
            Self::Terminate => PossibleValue::new("Terminate").help("End a liability"),
        };
        Some(pv)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            s if s.eq_ignore_ascii_case("Insert") => Ok(Self::Insert),
            s if s.eq_ignore_ascii_case("Terminate") => Ok(Self::Terminate),
            _ => Err(anyhow::anyhow!("invalid Action: {s}")),
        }
    }
}

/// Pick `UC` or `LCW/LCWRA` uniformly at random.
pub fn random_universal_credit_record_type<R>(rng: &mut R) -> RecordType
where
    R: Rng + ?Sized,
{
    random_choice(rng)
}

/// Pick `Insert` or `Terminate` uniformly at random.
pub fn random_universal_credit_action<R>(rng: &mut R) -> Action
where
    R: Rng + ?Sized,
{
    random_choice(rng)
}
