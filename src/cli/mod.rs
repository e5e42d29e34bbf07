//! Command-line interface for abseq.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **align**: Local alignment of two sequences with identity and per-column classification
//! - **annotate**: Split sequences into framework and CDR regions under a numbering scheme
//! - **schemes**: List or show the built-in numbering schemes
//!
//! ## Usage
//!
//! ```text
//! # Align two inline sequences
//! abseq align heavy=EVQLVESGGGLVQPGG light=EVQLVESGGGLVKPGG
//!
//! # Align the first two records of a FASTA file
//! abseq align -i antibodies.fa.gz --gap-penalty 1 --mismatch-score -1
//!
//! # Annotate every record with Chothia regions, as JSON
//! abseq annotate -i antibodies.fa --scheme chothia --format json
//!
//! # Show a scheme's boundary table
//! abseq schemes show imgt
//! ```

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::sequence::{RawSequence, SequenceValidator};
use crate::parsing;
use crate::utils::validation::MAX_SEQUENCES;

pub mod align;
pub mod annotate;
pub mod render;
pub mod schemes;

#[derive(Parser)]
#[command(name = "abseq")]
#[command(version)]
#[command(about = "Align antibody sequences and annotate their framework and CDR regions")]
#[command(
    long_about = "abseq compares pairs of amino-acid or nucleotide sequences and labels antibody regions.\n\nIt provides:\n- Smith-Waterman local alignment with percent identity and match/mismatch/gap columns\n- FR/CDR region annotation under the Kabat, IMGT, Chothia, and Honegger schemes"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Locally align two sequences
    Align(align::AlignArgs),

    /// Annotate sequences with framework and CDR regions
    Annotate(annotate::AnnotateArgs),

    /// Inspect the built-in numbering schemes
    Schemes(schemes::SchemesArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Sequence inputs shared by `align` and `annotate`
#[derive(clap::Args)]
pub struct InputArgs {
    /// Sequences as NAME=SEQUENCE
    #[arg(value_name = "NAME=SEQUENCE")]
    pub sequences: Vec<String>,

    /// Input file(s): FASTA (optionally .gz/.bgz), TSV, or CSV.
    /// Use '-' to read FASTA from stdin
    #[arg(short, long = "input", visible_alias = "fasta", value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Reject residues outside the IUPAC alphabet (plus '*')
    #[arg(long)]
    pub strict: bool,
}

impl InputArgs {
    /// Read every input file, then the inline arguments, in command-line order.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be parsed, an inline argument is
    /// malformed, or the combined input exceeds the sequence limit.
    pub fn load(&self) -> anyhow::Result<Vec<RawSequence>> {
        let mut sequences = Vec::new();

        for path in &self.inputs {
            let parsed = if path.to_string_lossy() == "-" {
                parsing::fasta::read_fasta(io::stdin().lock())?
            } else {
                parsing::parse_sequence_file(path)?
            };
            tracing::debug!("Read {} sequences from {}", parsed.len(), path.display());
            sequences.extend(parsed);
        }

        sequences.extend(parsing::inline::parse_inline_all(&self.sequences)?);

        if sequences.len() > MAX_SEQUENCES {
            anyhow::bail!(
                "Too many sequences: {} exceeds maximum of {MAX_SEQUENCES}",
                sequences.len()
            );
        }

        Ok(sequences)
    }

    #[must_use]
    pub fn validator(&self) -> SequenceValidator {
        if self.strict {
            SequenceValidator::strict()
        } else {
            SequenceValidator::new()
        }
    }
}
