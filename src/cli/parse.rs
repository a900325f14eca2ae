use std::path::PathBuf;

use clap::Args;

use crate::cli::output::{print_results, recalculate};
use crate::cli::OutputFormat;
use crate::core::result::ResultCollection;
use crate::parsing::ipcress::{parse_report, parse_report_file};

#[derive(Args)]
pub struct ParseArgs {
    /// ipcress report file
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Recount mismatches from the alignments, treating satisfied IUPAC
    /// wobbles in the primers as matches
    #[arg(long)]
    pub recalculate: bool,
}

/// Execute parse subcommand
///
/// # Errors
///
/// Returns an error if the report cannot be read or parsed, or if
/// mismatches cannot be recalculated.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ParseArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut results = read_input(&args)?;

    if verbose {
        eprintln!("Parsed {} results from report", results.len());
    }

    if args.recalculate {
        results = recalculate(results)?;
    }

    print_results(&results, format)
}

fn read_input(args: &ParseArgs) -> anyhow::Result<ResultCollection> {
    use std::io::{self, Read};

    // Handle stdin
    if args.input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(parse_report(&buffer)?);
    }

    parse_report_file(&args.input)
        .map_err(|e| anyhow::anyhow!("{}: {e}", args.input.display()))
}
