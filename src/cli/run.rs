use std::path::PathBuf;

use clap::Args;

use crate::cli::output::{print_results, recalculate};
use crate::cli::{OutputFormat, PrimerArgs};
use crate::runner::{self, RunOptions, DEFAULT_IPCRESS_PATH};

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub primers: PrimerArgs,

    /// FASTA file searched for products
    #[arg(required = true)]
    pub fasta: PathBuf,

    /// Mismatches allowed per primer (ipcress default when omitted)
    #[arg(short, long)]
    pub mismatch: Option<u32>,

    /// Path to the ipcress executable
    #[arg(long, default_value = DEFAULT_IPCRESS_PATH)]
    pub ipcress_path: PathBuf,

    /// Recount mismatches from the alignments, treating satisfied IUPAC
    /// wobbles in the primers as matches
    #[arg(long)]
    pub recalculate: bool,
}

/// Execute run subcommand
///
/// # Errors
///
/// Returns an error for invalid primers, if ipcress cannot be run or fails,
/// or if its report cannot be parsed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RunArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let (primers, bounds) = args.primers.primer_set()?;

    if verbose {
        eprintln!("Primer set: {}", primers.to_ipcress_format(bounds));
    }

    let options = RunOptions {
        ipcress_path: args.ipcress_path.clone(),
        bounds,
        mismatches: args.mismatch,
    };
    let mut results = runner::run(&primers, &args.fasta, &options)?;

    if verbose {
        eprintln!("ipcress reported {} results", results.len());
    }

    if results.is_empty() {
        eprintln!("No products found.");
    }

    if args.recalculate {
        results = recalculate(results)?;
    }

    print_results(&results, format)
}
