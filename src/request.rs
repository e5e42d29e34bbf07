//! Request entry points.
//!
//! These take the raw `(name, sequence)` pairs a front end collected, run all
//! validation up front and then hand off to the alignment or annotation
//! engines. Every failure comes back as a [`RequestError`] value.
//!
//! Input slots where both the name and the sequence are blank are treated as
//! unused and skipped. A slot with only one blank field is an error.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::annotation::annotator::{AnnotatedSequence, RegionAnnotator};
use crate::catalog::schemes::SchemeKind;
use crate::core::sequence::{RawSequence, Sequence, SequenceValidator};
use crate::matching::engine::{
    AlignmentEngine, AlignmentError, AlignmentReport, ScoringError, ScoringScheme,
};
use crate::utils::validation::{ValidationError, MAX_SEQUENCES};

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Empty input: {0}")]
    EmptyInput(ValidationError),

    #[error("Invalid sequence: {0}")]
    InvalidSequence(ValidationError),

    #[error("At least two sequences are required for alignment, found {found}")]
    InsufficientSequences { found: usize },

    #[error("No sequences supplied")]
    NoInput,

    #[error("Too many sequences: {0} exceeds maximum of {MAX_SEQUENCES}")]
    TooManySequences(usize),

    #[error("Invalid scoring: {0}")]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Alignment(#[from] AlignmentError),
}

impl From<ValidationError> for RequestError {
    fn from(err: ValidationError) -> Self {
        if err.is_empty_input() {
            Self::EmptyInput(err)
        } else {
            Self::InvalidSequence(err)
        }
    }
}

/// Validate every non-blank input, preserving order.
///
/// # Errors
///
/// Returns `RequestError::TooManySequences` past the input limit, or the first
/// validation failure.
pub fn collect_sequences(
    inputs: &[RawSequence],
    validator: &SequenceValidator,
) -> Result<Vec<Sequence>, RequestError> {
    if inputs.len() > MAX_SEQUENCES {
        return Err(RequestError::TooManySequences(inputs.len()));
    }

    let mut sequences = Vec::with_capacity(inputs.len());
    for (index, raw) in inputs.iter().enumerate() {
        if raw.is_blank() {
            warn!("Skipping blank input #{}", index + 1);
            continue;
        }
        sequences.push(validator.validate(&raw.name, &raw.sequence)?);
    }

    debug!(
        "Validated {} of {} inputs (strict: {})",
        sequences.len(),
        inputs.len(),
        validator.is_strict()
    );
    Ok(sequences)
}

/// Validate inputs and select the pair to align.
///
/// When more than two sequences are supplied, the first two are used.
///
/// # Errors
///
/// Returns a validation error, or `RequestError::InsufficientSequences` when
/// fewer than two non-blank sequences remain.
pub fn prepare_pair(
    inputs: &[RawSequence],
    validator: &SequenceValidator,
) -> Result<(Sequence, Sequence), RequestError> {
    let sequences = collect_sequences(inputs, validator)?;
    let found = sequences.len();

    let mut iter = sequences.into_iter();
    match (iter.next(), iter.next()) {
        (Some(a), Some(b)) => {
            if found > 2 {
                info!("{found} sequences supplied; aligning the first two");
            }
            Ok((a, b))
        }
        _ => Err(RequestError::InsufficientSequences { found }),
    }
}

/// Align the first two supplied sequences.
///
/// A zero-score empty alignment is a successful result, not an error.
///
/// # Errors
///
/// Returns `RequestError::Scoring` for an invalid scoring scheme,
/// `RequestError::Alignment` when the pair is too long to align together,
/// otherwise see [`prepare_pair`]. No alignment work happens unless every
/// check passes.
pub fn compare_sequences(
    inputs: &[RawSequence],
    scoring: ScoringScheme,
    validator: &SequenceValidator,
) -> Result<AlignmentReport, RequestError> {
    scoring.validate()?;
    let (a, b) = prepare_pair(inputs, validator)?;

    let alignment = AlignmentEngine::with_scoring(scoring).align(&a, &b)?;
    Ok(AlignmentReport::new(&a, &b, alignment))
}

/// Annotate every supplied sequence under a scheme.
///
/// # Errors
///
/// Returns `RequestError::NoInput` when no non-blank sequences are supplied,
/// or the first validation failure.
pub fn annotate_sequences(
    inputs: &[RawSequence],
    scheme: SchemeKind,
    validator: &SequenceValidator,
) -> Result<Vec<AnnotatedSequence>, RequestError> {
    let sequences = collect_sequences(inputs, validator)?;
    if sequences.is_empty() {
        return Err(RequestError::NoInput);
    }

    let annotator = RegionAnnotator::new(&scheme.scheme());
    Ok(sequences.iter().map(|s| annotator.annotate(s)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, sequence: &str) -> RawSequence {
        RawSequence::new(name, sequence)
    }

    #[test]
    fn test_compare_identical() {
        let report = compare_sequences(
            &[raw("a", "ACDEFG"), raw("b", "acdefg")],
            ScoringScheme::default(),
            &SequenceValidator::new(),
        )
        .unwrap();

        assert_eq!(report.alignment.score, 6);
        assert!((report.percent_identity - 100.0).abs() < f64::EPSILON);
        assert_eq!(report.name_a, "a");
        assert_eq!(report.name_b, "b");
    }

    #[test]
    fn test_insufficient_sequences() {
        let result = compare_sequences(
            &[raw("a", "ACDEFG")],
            ScoringScheme::default(),
            &SequenceValidator::new(),
        );
        assert!(matches!(
            result,
            Err(RequestError::InsufficientSequences { found: 1 })
        ));

        let result = compare_sequences(&[], ScoringScheme::default(), &SequenceValidator::new());
        assert!(matches!(
            result,
            Err(RequestError::InsufficientSequences { found: 0 })
        ));
    }

    #[test]
    fn test_blank_slots_skipped() {
        let report = compare_sequences(
            &[raw("", ""), raw("a", "ACD"), raw("  ", "\n"), raw("b", "ACD")],
            ScoringScheme::default(),
            &SequenceValidator::new(),
        )
        .unwrap();
        assert_eq!(report.alignment.score, 3);

        // Blank slots do not count towards the two required sequences
        let result = compare_sequences(
            &[raw("a", "ACD"), raw("", "")],
            ScoringScheme::default(),
            &SequenceValidator::new(),
        );
        assert!(matches!(
            result,
            Err(RequestError::InsufficientSequences { found: 1 })
        ));
    }

    #[test]
    fn test_half_blank_is_empty_input() {
        let result = compare_sequences(
            &[raw("a", "ACD"), raw("b", "   ")],
            ScoringScheme::default(),
            &SequenceValidator::new(),
        );
        assert!(matches!(result, Err(RequestError::EmptyInput(_))));

        let result = annotate_sequences(&[raw("", "ACD")], SchemeKind::Kabat, &SequenceValidator::new());
        assert!(matches!(
            result,
            Err(RequestError::EmptyInput(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn test_strict_rejection_is_invalid_sequence() {
        let result = compare_sequences(
            &[raw("a", "AC1D"), raw("b", "ACD")],
            ScoringScheme::default(),
            &SequenceValidator::strict(),
        );
        assert!(matches!(result, Err(RequestError::InvalidSequence(_))));
    }

    #[test]
    fn test_invalid_scoring_rejected() {
        let scoring = ScoringScheme {
            match_score: 0,
            ..ScoringScheme::default()
        };
        let result = compare_sequences(
            &[raw("a", "ACD"), raw("b", "ACD")],
            scoring,
            &SequenceValidator::new(),
        );
        assert!(matches!(result, Err(RequestError::Scoring(_))));
    }

    #[test]
    fn test_no_similarity_is_valid_result() {
        let report = compare_sequences(
            &[raw("a", "AAAA"), raw("b", "CCCC")],
            ScoringScheme::default(),
            &SequenceValidator::new(),
        )
        .unwrap();
        assert!(report.is_empty());
        assert_eq!(report.alignment.score, 0);
        assert!(report.percent_identity.abs() < f64::EPSILON);
    }

    #[test]
    fn test_extra_sequences_ignored() {
        let report = compare_sequences(
            &[raw("a", "ACD"), raw("b", "ACD"), raw("c", "WWW")],
            ScoringScheme::default(),
            &SequenceValidator::new(),
        )
        .unwrap();
        assert_eq!(report.name_b, "b");
    }

    #[test]
    fn test_annotate_sequences() {
        let seq = "A".repeat(90);
        let annotated = annotate_sequences(
            &[raw("h1", &seq), raw("", ""), raw("h2", "ACDEFG")],
            SchemeKind::Kabat,
            &SequenceValidator::new(),
        )
        .unwrap();

        assert_eq!(annotated.len(), 2);
        assert_eq!(annotated[0].spans.len(), 7);
        assert_eq!(annotated[1].spans.len(), 1);
        assert_eq!(annotated[1].spans[0].name, "FR1");
    }

    #[test]
    fn test_annotate_no_input() {
        let result = annotate_sequences(&[], SchemeKind::Imgt, &SequenceValidator::new());
        assert!(matches!(result, Err(RequestError::NoInput)));

        let result = annotate_sequences(&[raw(" ", "")], SchemeKind::Imgt, &SequenceValidator::new());
        assert!(matches!(result, Err(RequestError::NoInput)));
    }

    #[test]
    fn test_too_many_inputs() {
        let inputs = vec![raw("a", "A"); MAX_SEQUENCES + 1];
        let result = annotate_sequences(&inputs, SchemeKind::Kabat, &SequenceValidator::new());
        assert!(matches!(result, Err(RequestError::TooManySequences(_))));
    }
}
