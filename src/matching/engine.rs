use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::sequence::Sequence;
use crate::core::types::GAP;
use crate::matching::classify::{classify, AlignmentStats, ClassifiedColumn};
use crate::matching::scoring::percent_identity;
use crate::utils::validation::{matrix_cells, MAX_MATRIX_CELLS, MAX_SEQUENCE_LENGTH};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignmentError {
    #[error("Cannot align an empty sequence")]
    EmptyAlignmentInput,

    #[error("Score matrix of {rows}x{cols} cells exceeds maximum of {MAX_MATRIX_CELLS}")]
    MatrixTooLarge { rows: usize, cols: usize },
}

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Failed to read scoring file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse scoring file: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid scoring scheme: {0}")]
    Invalid(String),
}

/// Default score for identical residues
pub const DEFAULT_MATCH_SCORE: i32 = 1;
/// Default score for differing residues
pub const DEFAULT_MISMATCH_SCORE: i32 = 0;
/// Default linear gap penalty
pub const DEFAULT_GAP_PENALTY: i32 = 0;

/// Largest absolute value accepted for any scoring parameter.
///
/// A full-length run of matches or gaps then stays within `i32`.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const MAX_SCORE_MAGNITUDE: i32 = i32::MAX / (MAX_SEQUENCE_LENGTH as i32 + 1);

/// Scoring parameters for local alignment.
///
/// The defaults (match 1, mismatch 0, gap 0) give the unweighted variant where
/// the score is simply the number of identical aligned residues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringScheme {
    /// Added when the two residues are identical
    pub match_score: i32,
    /// Added when the two residues differ
    pub mismatch_score: i32,
    /// Subtracted for every gap column (linear)
    pub gap_penalty: i32,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self {
            match_score: DEFAULT_MATCH_SCORE,
            mismatch_score: DEFAULT_MISMATCH_SCORE,
            gap_penalty: DEFAULT_GAP_PENALTY,
        }
    }
}

impl ScoringScheme {
    /// Check the parameters describe a usable local alignment
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::Invalid` if the match score is not positive, the
    /// gap penalty is negative, a mismatch scores higher than a match, or any
    /// value exceeds [`MAX_SCORE_MAGNITUDE`] in absolute value.
    pub fn validate(&self) -> Result<(), ScoringError> {
        for (field, value) in [
            ("match_score", self.match_score),
            ("mismatch_score", self.mismatch_score),
            ("gap_penalty", self.gap_penalty),
        ] {
            if value.unsigned_abs() > MAX_SCORE_MAGNITUDE.unsigned_abs() {
                return Err(ScoringError::Invalid(format!(
                    "{field} must be within ±{MAX_SCORE_MAGNITUDE}, got {value}"
                )));
            }
        }
        if self.match_score <= 0 {
            return Err(ScoringError::Invalid(format!(
                "match_score must be positive, got {}",
                self.match_score
            )));
        }
        if self.gap_penalty < 0 {
            return Err(ScoringError::Invalid(format!(
                "gap_penalty must not be negative, got {}",
                self.gap_penalty
            )));
        }
        if self.mismatch_score > self.match_score {
            return Err(ScoringError::Invalid(format!(
                "mismatch_score ({}) must not exceed match_score ({})",
                self.mismatch_score, self.match_score
            )));
        }
        Ok(())
    }

    /// Parse and validate a scoring scheme from JSON.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::ParseError` for malformed JSON or
    /// `ScoringError::Invalid` if the values fail validation.
    pub fn from_json(json: &str) -> Result<Self, ScoringError> {
        let scoring: Self = serde_json::from_str(json)?;
        scoring.validate()?;
        Ok(scoring)
    }

    /// Load a scoring scheme from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::ReadError` if the file cannot be read, otherwise
    /// the errors of [`ScoringScheme::from_json`].
    pub fn load_from_file(path: &Path) -> Result<Self, ScoringError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    #[inline]
    fn substitution(&self, a: char, b: char) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}

/// One optimal local alignment between two sequences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    /// Covered part of sequence A with `-` where B has an extra residue
    pub aligned_a: String,
    /// Covered part of sequence B with `-` where A has an extra residue
    pub aligned_b: String,
    /// Start of the covered range in A (0-based)
    pub start_a: usize,
    /// End of the covered range in A (exclusive)
    pub end_a: usize,
    /// Start of the covered range in B (0-based)
    pub start_b: usize,
    /// End of the covered range in B (exclusive)
    pub end_b: usize,
    /// Local alignment score; 0 for the empty alignment
    pub score: i32,
}

impl Alignment {
    /// The result when no positive-scoring local alignment exists
    #[must_use]
    pub fn empty() -> Self {
        Self {
            aligned_a: String::new(),
            aligned_b: String::new(),
            start_a: 0,
            end_a: 0,
            start_b: 0,
            end_b: 0,
            score: 0,
        }
    }

    /// True when no meaningful similarity was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aligned_a.is_empty()
    }

    /// Number of alignment columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.aligned_a.chars().count()
    }
}

/// Dense `(m+1) x (n+1)` local alignment score matrix
struct ScoreMatrix {
    cols: usize,
    cells: Vec<i32>,
    /// Top-left-most maximum: (i, j, score)
    best: (usize, usize, i32),
}

impl ScoreMatrix {
    fn fill(a: &[char], b: &[char], scoring: &ScoringScheme) -> Result<Self, AlignmentError> {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let too_large = AlignmentError::MatrixTooLarge { rows, cols };

        let size = matrix_cells(a.len(), b.len()).ok_or(too_large.clone())?;
        let mut cells: Vec<i32> = Vec::new();
        cells.try_reserve_exact(size).map_err(|_| too_large)?;
        cells.resize(size, 0);
        let mut best = (0, 0, 0);

        for i in 1..rows {
            for j in 1..cols {
                let diagonal = cells[(i - 1) * cols + (j - 1)]
                    .saturating_add(scoring.substitution(a[i - 1], b[j - 1]));
                let up = cells[(i - 1) * cols + j].saturating_sub(scoring.gap_penalty);
                let left = cells[i * cols + (j - 1)].saturating_sub(scoring.gap_penalty);
                let value = 0.max(diagonal).max(up).max(left);
                cells[i * cols + j] = value;

                // Strictly greater keeps the first cell in row-major order
                if value > best.2 {
                    best = (i, j, value);
                }
            }
        }

        Ok(Self { cols, cells, best })
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> i32 {
        self.cells[i * self.cols + j]
    }
}

/// Computes optimal local alignments (Smith-Waterman with a linear gap penalty)
#[derive(Debug, Clone, Default)]
pub struct AlignmentEngine {
    scoring: ScoringScheme,
}

impl AlignmentEngine {
    /// Create an engine with the unweighted default scoring
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scoring(scoring: ScoringScheme) -> Self {
        Self { scoring }
    }

    #[must_use]
    pub fn scoring(&self) -> &ScoringScheme {
        &self.scoring
    }

    /// Align two validated sequences
    ///
    /// # Errors
    ///
    /// Returns `AlignmentError::EmptyAlignmentInput` if either sequence is empty
    /// and `AlignmentError::MatrixTooLarge` if the pair is too long to align.
    pub fn align(&self, a: &Sequence, b: &Sequence) -> Result<Alignment, AlignmentError> {
        self.align_residues(&a.residues, &b.residues)
    }

    /// Align two residue strings.
    ///
    /// The end anchor is the top-left-most cell holding the maximum score.
    /// Traceback prefers the diagonal, then a gap in B (vertical), then a gap
    /// in A (horizontal), and stops at the first zero cell. The result is
    /// deterministic for fixed inputs and scoring.
    ///
    /// # Errors
    ///
    /// Returns `AlignmentError::EmptyAlignmentInput` if either string is empty
    /// and `AlignmentError::MatrixTooLarge` if the score matrix would exceed
    /// [`MAX_MATRIX_CELLS`]. The size check happens before any allocation.
    pub fn align_residues(&self, a: &str, b: &str) -> Result<Alignment, AlignmentError> {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        if a.is_empty() || b.is_empty() {
            return Err(AlignmentError::EmptyAlignmentInput);
        }

        debug!("Filling {}x{} score matrix", a.len() + 1, b.len() + 1);
        let matrix = ScoreMatrix::fill(&a, &b, &self.scoring)?;
        let (end_a, end_b, score) = matrix.best;

        if score <= 0 {
            debug!("No positive-scoring local alignment");
            return Ok(Alignment::empty());
        }

        let mut aligned_a: Vec<char> = Vec::new();
        let mut aligned_b: Vec<char> = Vec::new();
        let (mut i, mut j) = (end_a, end_b);

        while i > 0 && j > 0 {
            let current = matrix.get(i, j);
            if current == 0 {
                break;
            }

            let diagonal = matrix
                .get(i - 1, j - 1)
                .saturating_add(self.scoring.substitution(a[i - 1], b[j - 1]));
            if current == diagonal {
                aligned_a.push(a[i - 1]);
                aligned_b.push(b[j - 1]);
                i -= 1;
                j -= 1;
            } else if current == matrix.get(i - 1, j).saturating_sub(self.scoring.gap_penalty) {
                aligned_a.push(a[i - 1]);
                aligned_b.push(GAP);
                i -= 1;
            } else if current == matrix.get(i, j - 1).saturating_sub(self.scoring.gap_penalty) {
                aligned_a.push(GAP);
                aligned_b.push(b[j - 1]);
                j -= 1;
            } else {
                // Every positive cell has a predecessor; reaching here means a zero floor
                break;
            }
        }

        debug!(
            "Local alignment score {score}: A[{i}..{end_a}] vs B[{j}..{end_b}], {} columns",
            aligned_a.len()
        );

        Ok(Alignment {
            aligned_a: aligned_a.into_iter().rev().collect(),
            aligned_b: aligned_b.into_iter().rev().collect(),
            start_a: i,
            end_a,
            start_b: j,
            end_b,
            score,
        })
    }
}

/// Alignment of two named sequences with its derived measures
#[derive(Debug, Clone, Serialize)]
pub struct AlignmentReport {
    pub name_a: String,
    pub name_b: String,
    pub alignment: Alignment,
    /// Percent identity in `[0, 100]`
    pub percent_identity: f64,
    pub columns: Vec<ClassifiedColumn>,
    pub stats: AlignmentStats,
}

impl AlignmentReport {
    #[must_use]
    pub fn new(a: &Sequence, b: &Sequence, alignment: Alignment) -> Self {
        let columns = classify(&alignment);
        let stats = AlignmentStats::from_columns(&columns);
        let percent_identity = percent_identity(&alignment);

        Self {
            name_a: a.name.clone(),
            name_b: b.name.clone(),
            alignment,
            percent_identity,
            columns,
            stats,
        }
    }

    /// True when no positive-scoring alignment was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alignment.is_empty()
    }
}
