//! Parser for FASTA files using noodles.
//!
//! Reads every record as a raw `(name, sequence)` pair. Supports both
//! uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.faa`, `.fna` (uncompressed)
//! - the same with `.gz` or `.bgz` appended (compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;

use crate::core::sequence::RawSequence;
use crate::parsing::ParseError;
use crate::utils::validation::check_sequence_limit;

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    let stripped = path_str
        .strip_suffix(".gz")
        .or_else(|| path_str.strip_suffix(".bgz"))
        .unwrap_or(&path_str);

    matches!(
        Path::new(stripped)
            .extension()
            .and_then(OsStr::to_str),
        Some("fa" | "fasta" | "faa" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read every record of a FASTA file.
///
/// The record name is the header up to the first whitespace; the description
/// is dropped.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, `ParseError::InvalidFormat` if no records are found, or
/// `ParseError::TooManySequences` if the limit is exceeded.
pub fn read_fasta_file(path: &Path) -> Result<Vec<RawSequence>, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        // bgzip output is a series of gzip members
        read_fasta(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        read_fasta(BufReader::new(file))
    }
}

/// Read FASTA records from any buffered reader
///
/// # Errors
///
/// See [`read_fasta_file`].
pub fn read_fasta<R: BufRead>(reader: R) -> Result<Vec<RawSequence>, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut sequences = Vec::new();

    for result in fasta_reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        // Check sequence limit for DOS protection
        if check_sequence_limit(sequences.len()).is_some() {
            return Err(ParseError::TooManySequences(sequences.len()));
        }

        let name = String::from_utf8_lossy(record.name()).to_string();
        let residues = String::from_utf8_lossy(record.sequence().as_ref()).to_string();

        sequences.push(RawSequence::new(name, residues));
    }

    if sequences.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA input".to_string(),
        ));
    }

    Ok(sequences)
}
