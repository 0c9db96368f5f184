use clap::Parser;
use tracing_subscriber::EnvFilter;

use tinder_fasta::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("tinder_fasta=debug,info")
    } else {
        EnvFilter::new("tinder_fasta=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Match(args) => {
            cli::match_cmd::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Plan(args) => {
            cli::plan::run(args, cli.format)?;
        }
    }

    Ok(())
}
