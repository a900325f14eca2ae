use clap::Parser;
use tracing_subscriber::EnvFilter;

use bio_ipcress::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("bio_ipcress=debug,info")
    } else {
        EnvFilter::new("bio_ipcress=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Parse(args) => {
            cli::parse::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Run(args) => {
            cli::run::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Primers(args) => {
            cli::primers::run(args, cli.format)?;
        }
    }

    Ok(())
}
