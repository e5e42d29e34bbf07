use std::path::PathBuf;
use std::time::Duration;

use clap::Args;

use crate::cli::render::render_alignment;
use crate::cli::{InputArgs, OutputFormat};
use crate::matching::engine::{AlignmentReport, ScoringScheme};
use crate::matching::worker::align_in_background;
use crate::request::prepare_pair;

#[derive(Args)]
pub struct AlignArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// JSON file with match_score, mismatch_score and gap_penalty.
    /// Individual flags below take precedence over the file
    #[arg(long, value_name = "FILE")]
    pub scoring: Option<PathBuf>,

    /// Score for identical residues (default 1)
    #[arg(long, allow_negative_numbers = true)]
    pub match_score: Option<i32>,

    /// Score for differing residues (default 0)
    #[arg(long, allow_negative_numbers = true)]
    pub mismatch_score: Option<i32>,

    /// Linear penalty subtracted per gap column (default 0)
    #[arg(long)]
    pub gap_penalty: Option<i32>,

    /// Give up waiting for the alignment after this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Columns per line in text output (0 disables wrapping)
    #[arg(long, default_value = "60")]
    pub width: usize,
}

impl AlignArgs {
    /// Build the scoring scheme from the optional file and flag overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the scoring file cannot be loaded or the final
    /// scheme is invalid.
    pub fn scoring_scheme(&self) -> anyhow::Result<ScoringScheme> {
        let mut scoring = match &self.scoring {
            Some(path) => ScoringScheme::load_from_file(path)?,
            None => ScoringScheme::default(),
        };

        if let Some(score) = self.match_score {
            scoring.match_score = score;
        }
        if let Some(score) = self.mismatch_score {
            scoring.mismatch_score = score;
        }
        if let Some(penalty) = self.gap_penalty {
            scoring.gap_penalty = penalty;
        }

        scoring.validate()?;
        Ok(scoring)
    }
}

/// Execute align subcommand
///
/// # Errors
///
/// Returns an error if inputs cannot be read or validated, fewer than two
/// sequences are supplied, or the alignment times out.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AlignArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let scoring = args.scoring_scheme()?;
    let inputs = args.input.load()?;
    let (a, b) = prepare_pair(&inputs, &args.input.validator())?;

    if verbose {
        eprintln!(
            "Aligning '{}' ({} residues) against '{}' ({} residues)",
            a.name,
            a.len(),
            b.name,
            b.len()
        );
        eprintln!(
            "Scoring: match {}, mismatch {}, gap penalty {}",
            scoring.match_score, scoring.mismatch_score, scoring.gap_penalty
        );
    }

    let timeout = args.timeout_secs.map(Duration::from_secs);
    let runtime = tokio::runtime::Runtime::new()?;
    let report = runtime.block_on(align_in_background(a, b, scoring, timeout))?;

    match format {
        OutputFormat::Text => print_text_report(&report, args.width),
        OutputFormat::Json => print_json_report(&report)?,
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

fn print_text_report(report: &AlignmentReport, width: usize) {
    println!("Alignment: {} vs {}", report.name_a, report.name_b);
    println!("{}", "=".repeat(60));

    if report.is_empty() {
        println!("\nNo positive-scoring local alignment found.");
        println!("Score: 0");
        println!("Identity: 0.00%");
        return;
    }

    let alignment = &report.alignment;
    println!("\nScore: {}", alignment.score);
    println!("Identity: {:.2}%", report.percent_identity);
    println!("Length: {} columns", alignment.len());
    println!(
        "  Matches: {}  Mismatches: {}  Gaps: {}",
        report.stats.matches, report.stats.mismatches, report.stats.gaps
    );
    println!(
        "Region in {}: {}-{}",
        report.name_a,
        alignment.start_a + 1,
        alignment.end_a
    );
    println!(
        "Region in {}: {}-{}",
        report.name_b,
        alignment.start_b + 1,
        alignment.end_b
    );

    println!("\n{}", render_alignment(report, width));
}

fn print_json_report(report: &AlignmentReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_tsv_report(report: &AlignmentReport) {
    let alignment = &report.alignment;
    println!(
        "name_a\tname_b\tscore\tpercent_identity\tmatches\tmismatches\tgaps\tstart_a\tend_a\tstart_b\tend_b\taligned_a\taligned_b"
    );
    println!(
        "{}\t{}\t{}\t{:.4}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        report.name_a,
        report.name_b,
        alignment.score,
        report.percent_identity,
        report.stats.matches,
        report.stats.mismatches,
        report.stats.gaps,
        alignment.start_a,
        alignment.end_a,
        alignment.start_b,
        alignment.end_b,
        alignment.aligned_a,
        alignment.aligned_b,
    );
}
