use serde::{Deserialize, Serialize};

use crate::utils::validation::{first_invalid_residue, ValidationError, MAX_SEQUENCE_LENGTH};

/// A raw `(name, sequence)` pair as supplied by a caller, before validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSequence {
    pub name: String,
    pub sequence: String,
}

impl RawSequence {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }

    /// True when both fields are blank (an unused input slot)
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.sequence.trim().is_empty()
    }
}

/// A named, normalized residue string.
///
/// Residues are uppercase with all whitespace removed. Construct through
/// [`SequenceValidator`] to guarantee a non-empty name and sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    /// Display name supplied with the sequence
    pub name: String,

    /// Normalized residues
    pub residues: String,
}

impl Sequence {
    /// Number of residues (characters, not bytes)
    #[must_use]
    pub fn len(&self) -> usize {
        self.residues.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

/// Normalizes and validates raw `(name, sequence)` input.
///
/// Permissive by default: any non-whitespace character is kept. Strict mode
/// additionally rejects characters outside the IUPAC alphabet.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceValidator {
    strict: bool,
}

impl SequenceValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn strict() -> Self {
        Self { strict: true }
    }

    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Normalize a raw name and sequence into a [`Sequence`].
    ///
    /// The name is trimmed; the sequence is uppercased and stripped of all
    /// whitespace (including embedded line breaks from pasted input).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` or `ValidationError::EmptySequence`
    /// if either field is blank after trimming, `ValidationError::SequenceTooLong`
    /// past the length limit, and in strict mode `ValidationError::InvalidResidue`.
    pub fn validate(&self, name: &str, raw: &str) -> Result<Sequence, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let residues: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_uppercase)
            .collect();

        if residues.is_empty() {
            return Err(ValidationError::EmptySequence(name.to_string()));
        }

        let length = residues.chars().count();
        if length > MAX_SEQUENCE_LENGTH {
            return Err(ValidationError::SequenceTooLong {
                name: name.to_string(),
                length,
            });
        }

        if self.strict {
            if let Some((position, residue)) = first_invalid_residue(&residues) {
                return Err(ValidationError::InvalidResidue {
                    name: name.to_string(),
                    residue,
                    position,
                });
            }
        }

        Ok(Sequence {
            name: name.to_string(),
            residues,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_whitespace() {
        let seq = SequenceValidator::new()
            .validate("  heavy  ", " evq lve\nsgg\t")
            .unwrap();
        assert_eq!(seq.name, "heavy");
        assert_eq!(seq.residues, "EVQLVESGG");
        assert_eq!(seq.len(), 9);
    }

    #[test]
    fn test_blank_fields_rejected() {
        let validator = SequenceValidator::new();
        assert_eq!(
            validator.validate("   ", "ACDE"),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            validator.validate("h1", " \n\t "),
            Err(ValidationError::EmptySequence("h1".to_string()))
        );
    }

    #[test]
    fn test_permissive_keeps_unusual_characters() {
        let seq = SequenceValidator::new().validate("x", "ac-1.").unwrap();
        assert_eq!(seq.residues, "AC-1.");
    }

    #[test]
    fn test_strict_rejects_non_alphabet() {
        let err = SequenceValidator::strict()
            .validate("x", "ACD1EF")
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidResidue {
                name: "x".to_string(),
                residue: '1',
                position: 3,
            }
        );
        assert!(SequenceValidator::strict().validate("x", "acdef*").is_ok());
    }

    #[test]
    fn test_raw_sequence_blank() {
        assert!(RawSequence::new(" ", "\n").is_blank());
        assert!(!RawSequence::new("h1", "").is_blank());
        assert!(!RawSequence::new("", "ACD").is_blank());
    }

    #[test]
    fn test_too_long_rejected() {
        let raw = "A".repeat(MAX_SEQUENCE_LENGTH + 1);
        let err = SequenceValidator::new().validate("big", &raw).unwrap_err();
        assert!(matches!(err, ValidationError::SequenceTooLong { .. }));
    }
}
