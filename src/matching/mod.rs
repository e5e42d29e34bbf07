//! Pairwise local alignment and similarity scoring.
//!
//! This module provides the alignment functionality:
//!
//! - [`AlignmentEngine`]: Smith-Waterman local alignment with a linear gap penalty
//! - [`classify`]: per-column match / mismatch / gap classification
//! - [`percent_identity`]: identity figure derived from an alignment
//! - [`AlignmentReport`]: an alignment bundled with all derived measures
//! - [`worker`]: running alignments off the calling thread
//!
//! ## Algorithm
//!
//! The engine fills an `(m+1) x (n+1)` score matrix with
//!
//! ```text
//! H[i][j] = max(0,
//!               H[i-1][j-1] + s(A[i-1], B[j-1]),
//!               H[i-1][j]   - gap,
//!               H[i][j-1]   - gap)
//! ```
//!
//! and traces back from the maximum. Ties are broken deterministically: the
//! top-left-most maximum is the end anchor, and traceback prefers the diagonal,
//! then a gap in B, then a gap in A.
//!
//! With the default scoring (match 1, mismatch 0, gap 0) the score counts
//! identical aligned residues.
//!
//! ## Example
//!
//! ```rust
//! use abseq::matching::engine::{AlignmentEngine, AlignmentReport};
//! use abseq::core::sequence::SequenceValidator;
//!
//! let validator = SequenceValidator::new();
//! let a = validator.validate("a", "ACDEFG").unwrap();
//! let b = validator.validate("b", "ACXEFG").unwrap();
//!
//! let alignment = AlignmentEngine::new().align(&a, &b).unwrap();
//! let report = AlignmentReport::new(&a, &b, alignment);
//!
//! assert_eq!(report.stats.mismatches, 1);
//! assert!((report.percent_identity - 83.33).abs() < 0.01);
//! ```
//!
//! [`AlignmentEngine`]: engine::AlignmentEngine
//! [`AlignmentReport`]: engine::AlignmentReport
//! [`classify`]: classify::classify
//! [`percent_identity`]: scoring::percent_identity

pub mod classify;
pub mod engine;
pub mod scoring;
pub mod worker;
