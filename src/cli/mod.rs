//! Command-line interface for bio-ipcress.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **parse**: Parse a saved ipcress report
//! - **run**: Run ipcress for a primer pair against a FASTA file
//! - **primers**: Print a primer pair in ipcress input-file syntax
//!
//! ## Usage
//!
//! ```text
//! # Parse a report, recounting mismatches around primer wobbles
//! bio-ipcress parse report.txt --recalculate
//!
//! # Pipe from ipcress
//! ipcress primers.txt db.fa | bio-ipcress parse - --format json
//!
//! # Run ipcress directly
//! bio-ipcress run --forward GGTCACTGCTA --reverse GGCTACCTTGTTACGACTTAAC db.fa
//! ```

use clap::{Parser, Subcommand};

use crate::core::primer_set::{
    DistanceBounds, PrimerSet, DEFAULT_MAX_DISTANCE, DEFAULT_MIN_DISTANCE, DEFAULT_PRIMER_SET_ID,
};
use crate::utils::validation::validate_primer;

pub mod output;
pub mod parse;
pub mod primers;
pub mod run;

#[derive(Parser)]
#[command(name = "bio-ipcress")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Run ipcress in-silico PCR and parse its reports")]
#[command(
    long_about = "bio-ipcress wraps the ipcress in-silico PCR tool.\n\nIt turns ipcress reports into structured results and can:\n- Run ipcress for a primer pair against a FASTA file\n- Recount primer mismatches, treating satisfied IUPAC wobbles as matches\n- Print results as text, JSON or TSV"
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
    /// Parse an ipcress report
    Parse(parse::ParseArgs),

    /// Run ipcress and parse its report
    Run(run::RunArgs),

    /// Print a primer pair as an ipcress input line
    Primers(primers::PrimersArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Primer pair and product length range shared by `run` and `primers`
#[derive(clap::Args)]
pub struct PrimerArgs {
    /// Forward primer (IUPAC codes allowed)
    #[arg(long)]
    pub forward: String,

    /// Reverse primer (IUPAC codes allowed)
    #[arg(long)]
    pub reverse: String,

    /// Experiment id written for the primer pair
    #[arg(long, default_value = DEFAULT_PRIMER_SET_ID)]
    pub id: String,

    /// Minimum product length
    #[arg(long, default_value_t = DEFAULT_MIN_DISTANCE)]
    pub min_distance: u64,

    /// Maximum product length
    #[arg(long, default_value_t = DEFAULT_MAX_DISTANCE)]
    pub max_distance: u64,
}

impl PrimerArgs {
    /// Validated primer set and distance bounds
    ///
    /// # Errors
    ///
    /// Returns an error for invalid primers, an id containing whitespace, or
    /// a minimum distance above the maximum.
    pub fn primer_set(&self) -> anyhow::Result<(PrimerSet, DistanceBounds)> {
        let forward = validate_primer(&self.forward)
            .map_err(|e| anyhow::anyhow!("Invalid forward primer: {e}"))?;
        let reverse = validate_primer(&self.reverse)
            .map_err(|e| anyhow::anyhow!("Invalid reverse primer: {e}"))?;

        if self.id.is_empty() || self.id.chars().any(char::is_whitespace) {
            anyhow::bail!("Primer set id must be a single non-empty word: '{}'", self.id);
        }
        if self.min_distance > self.max_distance {
            anyhow::bail!(
                "--min-distance ({}) must not exceed --max-distance ({})",
                self.min_distance,
                self.max_distance
            );
        }

        let primers = PrimerSet::new(forward, reverse).with_id(&self.id);
        let bounds = DistanceBounds {
            min_distance: self.min_distance,
            max_distance: self.max_distance,
        };
        Ok((primers, bounds))
    }
}
