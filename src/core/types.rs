use serde::{Deserialize, Serialize};

/// Character inserted into aligned strings where one sequence has no residue
pub const GAP: char = '-';

/// Functional class of an annotated region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionKind {
    /// Framework region: structurally conserved stretch flanking the CDRs
    #[serde(rename = "FR")]
    Framework,
    /// Complementarity-determining region: the hypervariable antigen contact loops
    #[serde(rename = "CDR")]
    Cdr,
}

impl RegionKind {
    /// Classify a region by name.
    ///
    /// Anything starting with `CDR` is a CDR; every other name is framework.
    #[must_use]
    pub fn from_region_name(name: &str) -> Self {
        if name.starts_with("CDR") {
            Self::Cdr
        } else {
            Self::Framework
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Framework => "FR",
            Self::Cdr => "CDR",
        }
    }
}

impl std::fmt::Display for RegionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// Classification of one alignment column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Both residues present and identical
    Match,
    /// Both residues present but different
    Mismatch,
    /// At least one side is a gap
    Gap,
}

impl ColumnKind {
    /// Symbol used on the middle line of a text alignment block
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Match => '|',
            Self::Mismatch => '.',
            Self::Gap => ' ',
        }
    }
}
