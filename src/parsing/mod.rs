//! Readers that turn user-supplied input into raw `(name, sequence)` pairs.
//!
//! This module provides parsers for:
//!
//! - **FASTA files**: plain or gzip/bgzip compressed, read with noodles
//! - **TSV/CSV files**: two-column `name<delim>sequence` tables
//! - **Inline arguments**: `NAME=SEQUENCE` strings from the command line
//!
//! Parsers only split input into [`RawSequence`] values. Normalization and
//! validation happen later in [`SequenceValidator`], so that blank slots can
//! be told apart from malformed input.
//!
//! ## Example
//!
//! ```rust
//! use abseq::parsing::inline::parse_inline;
//!
//! let raw = parse_inline("heavy=EVQLVESGG").unwrap();
//! assert_eq!(raw.name, "heavy");
//! assert_eq!(raw.sequence, "EVQLVESGG");
//! ```
//!
//! [`RawSequence`]: crate::core::sequence::RawSequence
//! [`SequenceValidator`]: crate::core::sequence::SequenceValidator

pub mod fasta;
pub mod inline;
pub mod tsv;

use std::path::Path;

use thiserror::Error;

use crate::core::sequence::RawSequence;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("FASTA parse error: {0}")]
    Noodles(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Too many sequences: {0} exceeds maximum allowed")]
    TooManySequences(usize),
}

/// Read sequences from a file, choosing the parser from the extension.
///
/// `.tsv` and `.csv` files are read as tables and FASTA extensions (optionally
/// gzip compressed) as FASTA.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for an unrecognized extension,
/// otherwise any error of the selected parser.
pub fn parse_sequence_file(path: &Path) -> Result<Vec<RawSequence>, ParseError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match ext.as_deref() {
        Some("tsv") => tsv::parse_tsv_file(path, '\t'),
        Some("csv") => tsv::parse_tsv_file(path, ','),
        _ if fasta::is_fasta_file(path) => fasta::read_fasta_file(path),
        _ => Err(ParseError::InvalidFormat(format!(
            "{}: unrecognized extension (expected FASTA, .tsv or .csv)",
            path.display()
        ))),
    }
}
