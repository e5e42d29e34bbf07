use std::path::Path;

use crate::core::sequence::RawSequence;
use crate::parsing::ParseError;
use crate::utils::validation::check_sequence_limit;

/// Parse a TSV/CSV file with columns: name, sequence
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_tsv_file(path: &Path, delimiter: char) -> Result<Vec<RawSequence>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_tsv_text(&content, delimiter)
}

/// Parse TSV/CSV text with columns: name, sequence
///
/// Blank lines and lines starting with `#` are skipped, as is a leading
/// `name<delim>sequence` header line.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a line has fewer than 2 fields or no
/// sequences are found, or `ParseError::TooManySequences` if the limit is
/// exceeded.
pub fn parse_tsv_text(text: &str, delimiter: char) -> Result<Vec<RawSequence>, ParseError> {
    let mut sequences = Vec::new();
    let mut first_data_line = true;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(delimiter).collect();

        // Check if first non-empty/non-comment line is a header
        if first_data_line {
            first_data_line = false;
            let first = fields.first().map(|s| s.trim().to_lowercase()).unwrap_or_default();
            if first == "name" || first == "id" {
                continue;
            }
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        if fields.len() < 2 {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has fewer than 2 fields"
            )));
        }

        // Check sequence limit for DOS protection
        if check_sequence_limit(sequences.len()).is_some() {
            return Err(ParseError::TooManySequences(sequences.len()));
        }

        sequences.push(RawSequence::new(fields[0].trim(), fields[1].trim()));
    }

    if sequences.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in file".to_string(),
        ));
    }

    Ok(sequences)
}
