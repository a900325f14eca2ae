use clap::Args;

use crate::cli::{OutputFormat, PrimerArgs};

#[derive(Args)]
pub struct PrimersArgs {
    #[command(flatten)]
    pub primers: PrimerArgs,
}

/// Execute primers subcommand
///
/// # Errors
///
/// Returns an error for invalid primers or distance bounds.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: PrimersArgs, format: OutputFormat) -> anyhow::Result<()> {
    let (primers, bounds) = args.primers.primer_set()?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": primers.id,
                "forward": primers.forward,
                "reverse": primers.reverse,
                "min_distance": bounds.min_distance,
                "max_distance": bounds.max_distance,
                "ipcress": primers.to_ipcress_format(bounds),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text | OutputFormat::Tsv => {
            println!("{}", primers.to_ipcress_format(bounds));
        }
    }

    Ok(())
}
