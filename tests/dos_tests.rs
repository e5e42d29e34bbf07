//! `DoS` Prevention Tests
//!
//! Verifies that the input limits bound the work a single request can cause:
//! sequence counts are capped in every reader, sequence lengths and the
//! O(m·n) score matrix size are capped before any matrix is built, scoring
//! values cannot overflow a score, and a slow alignment can be abandoned
//! through the worker timeout.

use std::fmt::Write as _;
use std::io::Write;
use std::time::{Duration, Instant};

use abseq::core::sequence::{RawSequence, SequenceValidator};
use abseq::matching::engine::{AlignmentError, ScoringScheme, MAX_SCORE_MAGNITUDE};
use abseq::matching::worker::{align_in_background, WorkerError};
use abseq::parsing::{fasta, inline, tsv, ParseError};
use abseq::request::{compare_sequences, RequestError};
use abseq::utils::validation::{
    ValidationError, MAX_MATRIX_CELLS, MAX_SEQUENCES, MAX_SEQUENCE_LENGTH,
};

/// Test that FASTA input past the sequence limit is refused
#[test]
fn test_fasta_sequence_count_limit() {
    let mut content = String::new();
    for i in 0..=MAX_SEQUENCES {
        writeln!(content, ">s{i}\nACD").unwrap();
    }

    let result = fasta::read_fasta(content.as_bytes());
    assert!(
        matches!(result, Err(ParseError::TooManySequences(_))),
        "Should refuse more than {MAX_SEQUENCES} records"
    );
}

/// Test that FASTA input exactly at the limit is accepted
#[test]
fn test_fasta_at_limit_accepted() {
    let mut file = tempfile::NamedTempFile::with_suffix(".fa").expect("Failed to create temp file");
    for i in 0..MAX_SEQUENCES {
        writeln!(file, ">s{i}\nACD").expect("Failed to write temp file");
    }
    file.flush().expect("Failed to flush temp file");

    let sequences = fasta::read_fasta_file(file.path()).expect("At-limit input should parse");
    assert_eq!(sequences.len(), MAX_SEQUENCES);
}

/// Test that tabular input past the sequence limit is refused
#[test]
fn test_tsv_sequence_count_limit() {
    let mut content = String::new();
    for i in 0..=MAX_SEQUENCES {
        writeln!(content, "s{i}\tACD").unwrap();
    }

    let result = tsv::parse_tsv_text(&content, '\t');
    assert!(matches!(result, Err(ParseError::TooManySequences(_))));
}

/// Test that inline arguments past the sequence limit are refused
#[test]
fn test_inline_sequence_count_limit() {
    let args = vec!["s=ACD"; MAX_SEQUENCES + 1];
    assert!(matches!(
        inline::parse_inline_all(&args),
        Err(ParseError::TooManySequences(_))
    ));
}

/// Test that requests past the sequence limit are refused before validation
#[test]
fn test_request_sequence_count_limit() {
    let inputs = vec![RawSequence::new("s", "ACD"); MAX_SEQUENCES + 1];
    let result = compare_sequences(&inputs, ScoringScheme::default(), &SequenceValidator::new());
    assert!(matches!(result, Err(RequestError::TooManySequences(_))));
}

/// Test that an oversized sequence is rejected before any matrix allocation
#[test]
fn test_sequence_length_limit_before_alignment() {
    let oversized = "A".repeat(MAX_SEQUENCE_LENGTH + 1);
    let inputs = vec![
        RawSequence::new("big", oversized),
        RawSequence::new("small", "ACD"),
    ];

    let start = Instant::now();
    let result = compare_sequences(&inputs, ScoringScheme::default(), &SequenceValidator::new());
    let elapsed = start.elapsed();

    assert!(matches!(
        result,
        Err(RequestError::InvalidSequence(
            ValidationError::SequenceTooLong { .. }
        ))
    ));
    assert!(
        elapsed < Duration::from_secs(5),
        "Rejection should not depend on alignment work"
    );
}

/// Test that two sequences each within the length limit cannot force an
/// oversized score matrix
#[test]
fn test_matrix_limit_for_pair_at_length_limit() {
    let at_limit = "ACDEFGHIKL".repeat(MAX_SEQUENCE_LENGTH / 10);
    let inputs = vec![
        RawSequence::new("a", at_limit.clone()),
        RawSequence::new("b", at_limit),
    ];

    let start = Instant::now();
    let result = compare_sequences(&inputs, ScoringScheme::default(), &SequenceValidator::new());
    let elapsed = start.elapsed();

    assert!(
        matches!(
            result,
            Err(RequestError::Alignment(AlignmentError::MatrixTooLarge {
                rows,
                cols
            })) if rows == MAX_SEQUENCE_LENGTH + 1 && cols == MAX_SEQUENCE_LENGTH + 1
        ),
        "Pairs beyond {MAX_MATRIX_CELLS} cells should be refused"
    );
    assert!(
        elapsed < Duration::from_secs(5),
        "Rejection should happen before the matrix is filled"
    );
}

/// Test that the worker path refuses oversized pairs the same way
#[tokio::test]
async fn test_worker_matrix_limit() {
    let validator = SequenceValidator::new();
    let long = "W".repeat(MAX_SEQUENCE_LENGTH);
    let a = validator.validate("a", &long).unwrap();
    let b = validator.validate("b", &long).unwrap();

    let result = align_in_background(a, b, ScoringScheme::default(), None).await;
    assert!(matches!(
        result,
        Err(WorkerError::Alignment(AlignmentError::MatrixTooLarge { .. }))
    ));
}

/// Test that scoring values large enough to overflow a score are refused
#[test]
fn test_extreme_scoring_refused() {
    let inputs = vec![RawSequence::new("a", "AA"), RawSequence::new("b", "AA")];
    let scoring = ScoringScheme {
        match_score: i32::MAX,
        ..ScoringScheme::default()
    };

    let result = compare_sequences(&inputs, scoring, &SequenceValidator::new());
    assert!(matches!(result, Err(RequestError::Scoring(_))));

    let bounded = ScoringScheme {
        match_score: MAX_SCORE_MAGNITUDE,
        ..ScoringScheme::default()
    };
    let report = compare_sequences(&inputs, bounded, &SequenceValidator::new()).unwrap();
    assert_eq!(report.alignment.score, 2 * MAX_SCORE_MAGNITUDE);
}

/// Test that whitespace does not count towards the length limit
#[test]
fn test_length_limit_counts_residues_only() {
    let padded = format!("{}\n\n   ", "A".repeat(MAX_SEQUENCE_LENGTH));
    let sequence = SequenceValidator::new()
        .validate("at_limit", &padded)
        .expect("Whitespace should be stripped before the length check");
    assert_eq!(sequence.len(), MAX_SEQUENCE_LENGTH);
}

/// Test that a slow alignment can be abandoned by the caller
#[tokio::test]
async fn test_alignment_timeout_protection() {
    let long = "ACDEFGHIKLMNPQRSTVWY".repeat(200);
    let validator = SequenceValidator::new();
    let a = validator.validate("a", &long).unwrap();
    let b = validator.validate("b", &long).unwrap();

    let start = Instant::now();
    let result = align_in_background(a, b, ScoringScheme::default(), Some(Duration::from_millis(1))).await;
    let waited = start.elapsed();

    assert!(
        matches!(result, Err(WorkerError::TimedOut(_))),
        "A 4000x4000 alignment should not finish within 1ms"
    );
    assert!(
        waited < Duration::from_secs(1),
        "Caller should regain control as soon as the timeout expires"
    );
}
