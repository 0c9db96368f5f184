use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::matching::engine::DEFAULT_OUTPUT_DIR;
use crate::matching::{plan, MatchMode, Matcher};
use crate::parsing::patterns::read_pattern_file;

#[derive(Args)]
pub struct PlanArgs {
    /// Pattern list, one pattern per line. Use '-' for stdin
    #[arg(required = true)]
    pub patterns: PathBuf,

    /// Output directory the files would be written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Match mode to validate the patterns against
    #[arg(short, long, value_enum, default_value_t = MatchMode::Regex)]
    pub mode: MatchMode,
}

/// Execute plan subcommand
///
/// # Errors
///
/// Returns an error if the pattern list cannot be read or a pattern does not
/// compile for the selected mode.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: PlanArgs, format: OutputFormat) -> anyhow::Result<()> {
    let patterns = read_pattern_file(&args.patterns)
        .with_context(|| format!("Failed to read pattern list {}", args.patterns.display()))?;

    for pattern in &patterns {
        Matcher::new(pattern, args.mode)?;
    }

    let planned = plan(&patterns, &args.output);

    match format {
        OutputFormat::Text => {
            for pass in &planned {
                println!(
                    "{} -> {} ({})",
                    pass.pattern,
                    pass.output.display(),
                    pass.token
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&planned)?),
        OutputFormat::Tsv => {
            println!("pattern\ttoken\toutput");
            for pass in &planned {
                println!("{}\t{}\t{}", pass.pattern, pass.token, pass.output.display());
            }
        }
    }

    Ok(())
}
