use clap::{Args, Subcommand};

use crate::catalog::schemes::SchemeKind;
use crate::catalog::store::{SchemeRegistry, SchemeSummary};
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct SchemesArgs {
    #[command(subcommand)]
    pub command: SchemesCommands,
}

#[derive(Subcommand)]
pub enum SchemesCommands {
    /// List all numbering schemes
    List,

    /// Show the region boundaries of a scheme
    Show {
        /// Scheme name (kabat, imgt, chothia, honegger)
        #[arg(required = true)]
        scheme: SchemeKind,
    },
}

/// Execute schemes subcommand
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SchemesArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let registry = SchemeRegistry::builtin();

    match args.command {
        SchemesCommands::List => {
            let summaries: Vec<SchemeSummary> = SchemeKind::ALL
                .iter()
                .map(|&kind| registry.summary(kind))
                .collect();
            match format {
                OutputFormat::Text => print_text_list(&summaries),
                OutputFormat::Json => println!("{}", registry.to_json()?),
                OutputFormat::Tsv => print_tsv_regions(&summaries),
            }
        }
        SchemesCommands::Show { scheme } => {
            let summary = registry.summary(scheme);
            match format {
                OutputFormat::Text => print_text_scheme(&summary),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
                OutputFormat::Tsv => print_tsv_regions(std::slice::from_ref(&summary)),
            }
        }
    }

    Ok(())
}

fn print_text_list(summaries: &[SchemeSummary]) {
    println!("{:<10} {:>8} {:>8}  Regions", "Scheme", "Ref len", "Regions");
    println!("{}", "-".repeat(60));
    for summary in summaries {
        let names: Vec<&str> = summary.regions.iter().map(|r| r.name).collect();
        println!(
            "{:<10} {:>8} {:>8}  {}",
            summary.scheme,
            summary.reference_length,
            summary.regions.len(),
            names.join(" ")
        );
    }
}

fn print_text_scheme(summary: &SchemeSummary) {
    println!("{} (reference length {})", summary.scheme, summary.reference_length);
    println!("{}", "=".repeat(40));
    println!("{:<6} {:<4} {:>6} {:>6}", "Region", "Kind", "Start", "End");
    for region in &summary.regions {
        let end = region
            .end
            .map_or_else(|| "len".to_string(), |end| end.to_string());
        println!(
            "{:<6} {:<4} {:>6} {:>6}",
            region.name, region.kind, region.start, end
        );
    }
}

fn print_tsv_regions(summaries: &[SchemeSummary]) {
    println!("scheme\tregion\tkind\tstart\tend");
    for summary in summaries {
        for region in &summary.regions {
            let end = region.end.map_or_else(String::new, |end| end.to_string());
            println!(
                "{}\t{}\t{}\t{}\t{}",
                summary.scheme, region.name, region.kind, region.start, end
            );
        }
    }
}
