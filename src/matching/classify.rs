use serde::Serialize;

use crate::core::types::{ColumnKind, GAP};
use crate::matching::engine::Alignment;

/// One alignment column with its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassifiedColumn {
    /// 0-based column index within the alignment
    pub position: usize,
    pub residue_a: char,
    pub residue_b: char,
    pub kind: ColumnKind,
}

/// Counts of each column kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AlignmentStats {
    pub matches: usize,
    pub mismatches: usize,
    pub gaps: usize,
}

impl AlignmentStats {
    #[must_use]
    pub fn from_columns(columns: &[ClassifiedColumn]) -> Self {
        columns.iter().fold(Self::default(), |mut acc, column| {
            match column.kind {
                ColumnKind::Match => acc.matches += 1,
                ColumnKind::Mismatch => acc.mismatches += 1,
                ColumnKind::Gap => acc.gaps += 1,
            }
            acc
        })
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.matches + self.mismatches + self.gaps
    }
}

/// Classify a single pair of aligned characters
#[must_use]
pub fn classify_pair(a: char, b: char) -> ColumnKind {
    if a == GAP || b == GAP {
        ColumnKind::Gap
    } else if a == b {
        ColumnKind::Match
    } else {
        ColumnKind::Mismatch
    }
}

/// Tag every column of an alignment as match, mismatch, or gap
#[must_use]
pub fn classify(alignment: &Alignment) -> Vec<ClassifiedColumn> {
    alignment
        .aligned_a
        .chars()
        .zip(alignment.aligned_b.chars())
        .enumerate()
        .map(|(position, (residue_a, residue_b))| ClassifiedColumn {
            position,
            residue_a,
            residue_b,
            kind: classify_pair(residue_a, residue_b),
        })
        .collect()
}
