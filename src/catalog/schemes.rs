use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::RegionKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemeError {
    #[error("Unknown numbering scheme '{0}' (expected one of: Kabat, IMGT, Chothia, Honegger)")]
    UnknownScheme(String),
}

/// Where a region ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionEnd {
    /// Fixed exclusive end index on the reference numbering
    Fixed(usize),
    /// Runs to the end of whatever sequence is annotated
    SequenceEnd,
}

/// A named half-open interval `[start, end)` of a numbering scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionDefinition {
    pub name: &'static str,
    pub start: usize,
    pub end: RegionEnd,
}

impl RegionDefinition {
    #[must_use]
    pub const fn fixed(name: &'static str, start: usize, end: usize) -> Self {
        Self {
            name,
            start,
            end: RegionEnd::Fixed(end),
        }
    }

    #[must_use]
    pub const fn open_ended(name: &'static str, start: usize) -> Self {
        Self {
            name,
            start,
            end: RegionEnd::SequenceEnd,
        }
    }

    #[must_use]
    pub fn kind(&self) -> RegionKind {
        RegionKind::from_region_name(self.name)
    }
}

const KABAT: [RegionDefinition; 7] = [
    RegionDefinition::fixed("FR1", 0, 23),
    RegionDefinition::fixed("CDR1", 23, 31),
    RegionDefinition::fixed("FR2", 31, 48),
    RegionDefinition::fixed("CDR2", 48, 56),
    RegionDefinition::fixed("FR3", 56, 71),
    RegionDefinition::fixed("CDR3", 71, 88),
    RegionDefinition::open_ended("FR4", 88),
];

const IMGT: [RegionDefinition; 7] = [
    RegionDefinition::fixed("FR1", 0, 26),
    RegionDefinition::fixed("CDR1", 26, 34),
    RegionDefinition::fixed("FR2", 34, 54),
    RegionDefinition::fixed("CDR2", 54, 61),
    RegionDefinition::fixed("FR3", 61, 85),
    RegionDefinition::fixed("CDR3", 85, 100),
    RegionDefinition::open_ended("FR4", 100),
];

const CHOTHIA: [RegionDefinition; 7] = [
    RegionDefinition::fixed("FR1", 0, 24),
    RegionDefinition::fixed("CDR1", 24, 32),
    RegionDefinition::fixed("FR2", 32, 53),
    RegionDefinition::fixed("CDR2", 53, 61),
    RegionDefinition::fixed("FR3", 61, 82),
    RegionDefinition::fixed("CDR3", 82, 98),
    RegionDefinition::open_ended("FR4", 98),
];

const HONEGGER: [RegionDefinition; 7] = [
    RegionDefinition::fixed("FR1", 0, 25),
    RegionDefinition::fixed("CDR1", 25, 33),
    RegionDefinition::fixed("FR2", 33, 55),
    RegionDefinition::fixed("CDR2", 55, 65),
    RegionDefinition::fixed("FR3", 65, 75),
    RegionDefinition::fixed("CDR3", 75, 87),
    RegionDefinition::open_ended("FR4", 87),
];

/// The supported numbering schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemeKind {
    Kabat,
    #[serde(rename = "IMGT")]
    Imgt,
    Chothia,
    Honegger,
}

impl SchemeKind {
    pub const ALL: [SchemeKind; 4] = [Self::Kabat, Self::Imgt, Self::Chothia, Self::Honegger];

    /// Region table in canonical order
    #[must_use]
    pub fn regions(self) -> &'static [RegionDefinition] {
        match self {
            Self::Kabat => &KABAT,
            Self::Imgt => &IMGT,
            Self::Chothia => &CHOTHIA,
            Self::Honegger => &HONEGGER,
        }
    }

    /// Reference length: the position where the open-ended final region starts
    #[must_use]
    pub fn reference_length(self) -> usize {
        self.regions().last().map_or(0, |r| r.start)
    }

    #[must_use]
    pub fn scheme(self) -> NumberingScheme {
        NumberingScheme {
            kind: self,
            regions: self.regions(),
        }
    }
}

impl std::fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Kabat => "Kabat",
            Self::Imgt => "IMGT",
            Self::Chothia => "Chothia",
            Self::Honegger => "Honegger",
        })
    }
}

impl FromStr for SchemeKind {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kabat" => Ok(Self::Kabat),
            "imgt" => Ok(Self::Imgt),
            "chothia" => Ok(Self::Chothia),
            // "honneger" is the spelling older front-ends send
            "honegger" | "honneger" => Ok(Self::Honegger),
            _ => Err(SchemeError::UnknownScheme(s.to_string())),
        }
    }
}

/// A numbering scheme with its boundary table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberingScheme {
    pub kind: SchemeKind,
    pub regions: &'static [RegionDefinition],
}

impl NumberingScheme {
    #[must_use]
    pub fn reference_length(&self) -> usize {
        self.kind.reference_length()
    }
}
