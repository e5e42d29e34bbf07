//! Centralized validation and helper functions.

/// Maximum number of sequences accepted in a single request (DOS protection)
pub const MAX_SEQUENCES: usize = 10_000;

/// Maximum residues in a single sequence
pub const MAX_SEQUENCE_LENGTH: usize = 100_000;

/// Maximum cells in one `(m+1) x (n+1)` alignment score matrix (about 400 MB).
///
/// Two sequences can each pass the length limit and still be too large to
/// align together, so the engine checks the product separately.
pub const MAX_MATRIX_CELLS: usize = 100_000_000;

/// Input validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Sequence name is empty")]
    EmptyName,
    #[error("Sequence '{0}' is empty")]
    EmptySequence(String),
    #[error("Sequence '{name}' has invalid residue '{residue}' at position {position}")]
    InvalidResidue {
        name: String,
        residue: char,
        position: usize,
    },
    #[error("Sequence '{name}' is too long: {length} residues exceeds maximum of {MAX_SEQUENCE_LENGTH}")]
    SequenceTooLong { name: String, length: usize },
}

impl ValidationError {
    /// True for the blank-field conditions (empty name or empty sequence)
    #[must_use]
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyName | Self::EmptySequence(_))
    }
}

/// Check whether a residue belongs to the strict alphabet.
///
/// The strict alphabet is the IUPAC amino-acid code set (which also covers
/// every IUPAC nucleotide code) plus `*` for a stop. Input must already be
/// uppercased.
///
/// # Examples
///
/// ```
/// use abseq::utils::validation::is_valid_residue;
///
/// assert!(is_valid_residue('A'));
/// assert!(is_valid_residue('*'));
/// assert!(!is_valid_residue('-'));
/// assert!(!is_valid_residue('a'));
/// ```
#[must_use]
pub fn is_valid_residue(c: char) -> bool {
    c.is_ascii_uppercase() || c == '*'
}

/// Find the first residue outside the strict alphabet.
///
/// Returns the 0-based position and the offending character.
#[must_use]
pub fn first_invalid_residue(residues: &str) -> Option<(usize, char)> {
    residues
        .chars()
        .enumerate()
        .find(|(_, c)| !is_valid_residue(*c))
}

/// Check if adding another sequence would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new sequence.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_sequence_limit(count: usize) -> Option<String> {
    if count >= MAX_SEQUENCES {
        Some(format!(
            "Too many sequences: adding another would exceed maximum of {MAX_SEQUENCES}"
        ))
    } else {
        None
    }
}

/// Number of score matrix cells needed to align sequences of these lengths.
///
/// Returns None when the matrix would exceed [`MAX_MATRIX_CELLS`].
#[must_use]
pub fn matrix_cells(len_a: usize, len_b: usize) -> Option<usize> {
    len_a
        .checked_add(1)?
        .checked_mul(len_b.checked_add(1)?)
        .filter(|&cells| cells <= MAX_MATRIX_CELLS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_residue() {
        for c in 'A'..='Z' {
            assert!(is_valid_residue(c), "{c} should be valid");
        }
        assert!(is_valid_residue('*'));
        assert!(!is_valid_residue('-'));
        assert!(!is_valid_residue('.'));
        assert!(!is_valid_residue('1'));
        assert!(!is_valid_residue('a'));
        assert!(!is_valid_residue('é'));
    }

    #[test]
    fn test_first_invalid_residue() {
        assert_eq!(first_invalid_residue("ACDEFG"), None);
        assert_eq!(first_invalid_residue("AC-EFG"), Some((2, '-')));
        assert_eq!(first_invalid_residue("1CDEFG"), Some((0, '1')));
        assert_eq!(first_invalid_residue(""), None);
    }

    #[test]
    fn test_check_sequence_limit() {
        assert!(check_sequence_limit(0).is_none());
        assert!(check_sequence_limit(MAX_SEQUENCES - 1).is_none());
        assert!(check_sequence_limit(MAX_SEQUENCES).is_some());
        assert!(check_sequence_limit(MAX_SEQUENCES + 1).is_some());
    }

    #[test]
    fn test_matrix_cells() {
        assert_eq!(matrix_cells(0, 0), Some(1));
        assert_eq!(matrix_cells(10, 4), Some(55));
        assert_eq!(matrix_cells(9_999, 9_999), Some(MAX_MATRIX_CELLS));
        assert_eq!(matrix_cells(10_000, 9_999), None);
        assert_eq!(matrix_cells(MAX_SEQUENCE_LENGTH, MAX_SEQUENCE_LENGTH), None);
        assert_eq!(matrix_cells(usize::MAX, 1), None);
    }

    #[test]
    fn test_empty_input_classification() {
        assert!(ValidationError::EmptyName.is_empty_input());
        assert!(ValidationError::EmptySequence("h1".to_string()).is_empty_input());
        assert!(!ValidationError::SequenceTooLong {
            name: "h1".to_string(),
            length: MAX_SEQUENCE_LENGTH + 1
        }
        .is_empty_input());
    }
}
