use crate::core::sequence::RawSequence;
use crate::parsing::ParseError;
use crate::utils::validation::check_sequence_limit;

/// Parse a single `NAME=SEQUENCE` argument.
///
/// Only the first `=` separates the fields. Either side may be blank; blank
/// fields are reported later by validation.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the argument has no `=`.
pub fn parse_inline(arg: &str) -> Result<RawSequence, ParseError> {
    let (name, sequence) = arg.split_once('=').ok_or_else(|| {
        ParseError::InvalidFormat(format!(
            "Expected NAME=SEQUENCE, got '{}'",
            truncate_for_message(arg)
        ))
    })?;

    Ok(RawSequence::new(name, sequence))
}

/// Parse a list of `NAME=SEQUENCE` arguments
///
/// # Errors
///
/// Returns the first malformed argument's error, or
/// `ParseError::TooManySequences` if the limit is exceeded.
pub fn parse_inline_all<S: AsRef<str>>(args: &[S]) -> Result<Vec<RawSequence>, ParseError> {
    if check_sequence_limit(args.len().saturating_sub(1)).is_some() {
        return Err(ParseError::TooManySequences(args.len()));
    }

    args.iter().map(|arg| parse_inline(arg.as_ref())).collect()
}

fn truncate_for_message(arg: &str) -> String {
    const MAX_SHOWN: usize = 40;
    if arg.chars().count() > MAX_SHOWN {
        let head: String = arg.chars().take(MAX_SHOWN).collect();
        format!("{head}...")
    } else {
        arg.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::MAX_SEQUENCES;

    #[test]
    fn test_parse_inline() {
        assert_eq!(
            parse_inline("vh=EVQLVES").unwrap(),
            RawSequence::new("vh", "EVQLVES")
        );
        // Only the first '=' splits
        assert_eq!(
            parse_inline("a=b=c").unwrap(),
            RawSequence::new("a", "b=c")
        );
        assert_eq!(parse_inline("=ACD").unwrap(), RawSequence::new("", "ACD"));
    }

    #[test]
    fn test_missing_separator() {
        let err = parse_inline("EVQLVES").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
        assert!(err.to_string().contains("NAME=SEQUENCE"));
    }

    #[test]
    fn test_long_argument_truncated_in_message() {
        let arg = "A".repeat(500);
        let err = parse_inline(&arg).unwrap_err();
        assert!(err.to_string().len() < 100);
    }

    #[test]
    fn test_parse_inline_all() {
        let sequences = parse_inline_all(&["a=ACD", "b=ACE"]).unwrap();
        assert_eq!(sequences.len(), 2);
        assert!(parse_inline_all(&["a=ACD", "oops"]).is_err());
    }

    #[test]
    fn test_parse_inline_all_limit() {
        let args = vec!["x=A".to_string(); MAX_SEQUENCES + 1];
        assert!(matches!(
            parse_inline_all(&args),
            Err(ParseError::TooManySequences(_))
        ));

        let args = vec!["x=A".to_string(); MAX_SEQUENCES];
        assert!(parse_inline_all(&args).is_ok());
    }
}
