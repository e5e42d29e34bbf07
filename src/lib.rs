//! # abseq
//!
//! A library for comparing antibody sequences and labeling their framework
//! (FR) and complementarity-determining (CDR) regions.
//!
//! ## Features
//!
//! - **Local alignment**: self-contained Smith-Waterman with deterministic tie-breaking
//! - **Percent identity**: symmetric ungapped identity derived from an alignment
//! - **Column classification**: match / mismatch / gap per aligned position
//! - **Region annotation**: Kabat, IMGT, Chothia, and Honegger boundary tables
//!   mapped onto sequences of any length, with full coverage guaranteed
//!
//! ## Example
//!
//! ```rust
//! use abseq::{annotate_sequences, compare_sequences, RawSequence, SchemeKind};
//! use abseq::{ScoringScheme, SequenceValidator};
//!
//! let validator = SequenceValidator::new();
//! let inputs = vec![
//!     RawSequence::new("a", "ACDEFG"),
//!     RawSequence::new("b", "ACXEFG"),
//! ];
//!
//! let report = compare_sequences(&inputs, ScoringScheme::default(), &validator).unwrap();
//! assert_eq!(report.alignment.score, 5);
//! assert_eq!(report.stats.mismatches, 1);
//!
//! let annotated = annotate_sequences(&inputs, SchemeKind::Kabat, &validator).unwrap();
//! assert_eq!(annotated[0].spans[0].name, "FR1");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sequence types and input normalization
//! - [`catalog`]: Built-in numbering schemes
//! - [`annotation`]: Region annotation
//! - [`matching`]: Alignment engine, classification, and identity scoring
//! - [`request`]: Validated entry points for alignment and annotation requests
//! - [`parsing`]: FASTA, TSV, and inline sequence readers
//! - [`cli`]: Command-line interface implementation

pub mod annotation;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod request;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::annotation::annotator::{AnnotatedSequence, DegenerateRegionWarning, RegionAnnotator, Span};
pub use crate::catalog::schemes::{NumberingScheme, SchemeKind};
pub use crate::catalog::store::SchemeRegistry;
pub use crate::core::sequence::{RawSequence, Sequence, SequenceValidator};
pub use crate::core::types::*;
pub use crate::matching::engine::{Alignment, AlignmentEngine, AlignmentReport, ScoringScheme};
pub use crate::request::{annotate_sequences, compare_sequences, RequestError};
