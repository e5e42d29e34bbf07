//! Region annotation: partitioning a sequence into labeled FR/CDR spans.
//!
//! [`RegionAnnotator`] applies a numbering scheme's boundary table to a
//! concrete sequence. The result is an [`AnnotatedSequence`] whose spans are
//! sorted, non-overlapping, and cover every residue exactly once.
//!
//! ## Clipping
//!
//! Boundaries are taken verbatim except where the sequence length forces a
//! change:
//!
//! - the last span always ends at the sequence length (shorter sequences clamp
//!   it, longer ones extend it)
//! - a region starting at or past the sequence end is omitted and reported as a
//!   [`DegenerateRegionWarning`]
//! - of two regions with the same start, the first in the table is kept
//!
//! Warnings are non-fatal: they ride along in the result and are logged.
//!
//! ## Example
//!
//! ```rust
//! use abseq::annotation::annotator::RegionAnnotator;
//! use abseq::catalog::schemes::SchemeKind;
//! use abseq::core::sequence::SequenceValidator;
//!
//! let seq = SequenceValidator::new().validate("vh", &"A".repeat(90)).unwrap();
//! let annotated = RegionAnnotator::new(&SchemeKind::Kabat.scheme()).annotate(&seq);
//!
//! let fr4 = annotated.spans.last().unwrap();
//! assert_eq!((fr4.start, fr4.end), (88, 90));
//! ```
//!
//! [`RegionAnnotator`]: annotator::RegionAnnotator
//! [`AnnotatedSequence`]: annotator::AnnotatedSequence
//! [`DegenerateRegionWarning`]: annotator::DegenerateRegionWarning

pub mod annotator;
