use clap::Args;

use crate::annotation::annotator::AnnotatedSequence;
use crate::catalog::schemes::SchemeKind;
use crate::cli::{InputArgs, OutputFormat};
use crate::request::annotate_sequences;

#[derive(Args)]
pub struct AnnotateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Numbering scheme (kabat, imgt, chothia, honegger)
    #[arg(short, long, default_value = "kabat")]
    pub scheme: SchemeKind,
}

/// Execute annotate subcommand
///
/// # Errors
///
/// Returns an error if inputs cannot be read or validated, or none are given.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AnnotateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let inputs = args.input.load()?;
    let annotated = annotate_sequences(&inputs, args.scheme, &args.input.validator())?;

    if verbose {
        let warnings: usize = annotated.iter().map(|a| a.warnings.len()).sum();
        eprintln!(
            "Annotated {} sequences with {} ({warnings} degenerate regions)",
            annotated.len(),
            args.scheme
        );
    }

    match format {
        OutputFormat::Text => print_text_annotations(&annotated),
        OutputFormat::Json => print_json_annotations(&annotated)?,
        OutputFormat::Tsv => print_tsv_annotations(&annotated),
    }

    Ok(())
}

fn print_text_annotations(annotated: &[AnnotatedSequence]) {
    for (i, entry) in annotated.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} ({} residues, {})",
            entry.sequence.name,
            entry.sequence.len(),
            entry.scheme
        );
        println!("{}", "-".repeat(60));

        for span in &entry.spans {
            println!(
                "  {:<5} {:<3} {:>5}-{:<5} {}",
                span.name,
                span.kind,
                span.start + 1,
                span.end,
                entry.span_residues(span)
            );
        }

        for warning in &entry.warnings {
            println!("  warning: {warning}");
        }
    }
}

fn print_json_annotations(annotated: &[AnnotatedSequence]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(annotated)?);
    Ok(())
}

fn print_tsv_annotations(annotated: &[AnnotatedSequence]) {
    println!("sequence\tscheme\tregion\tkind\tstart\tend\tresidues");
    for entry in annotated {
        for span in &entry.spans {
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                entry.sequence.name,
                entry.scheme,
                span.name,
                span.kind,
                span.start,
                span.end,
                entry.span_residues(span)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::schemes::SchemeKind;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn scheme_of(argv: &[&str]) -> Result<SchemeKind, clap::Error> {
        match Cli::try_parse_from(argv)?.command {
            Commands::Annotate(args) => Ok(args.scheme),
            _ => panic!("expected annotate"),
        }
    }

    #[test]
    fn test_scheme_selection() {
        assert_eq!(
            scheme_of(&["abseq", "annotate", "h=EVQL"]).unwrap(),
            SchemeKind::Kabat
        );
        assert_eq!(
            scheme_of(&["abseq", "annotate", "-s", "IMGT", "h=EVQL"]).unwrap(),
            SchemeKind::Imgt
        );
        assert_eq!(
            scheme_of(&["abseq", "annotate", "--scheme", "honneger", "h=EVQL"]).unwrap(),
            SchemeKind::Honegger
        );
    }

    #[test]
    fn test_unknown_scheme_rejected() {
        let err = scheme_of(&["abseq", "annotate", "--scheme", "martin", "h=EVQL"]).unwrap_err();
        assert!(err.to_string().contains("martin"));
    }
}
