use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::cli::{print_report, OutputFormat};
use crate::corpus::discovery::DEFAULT_GLOB;
use crate::corpus::{resolve_inputs, Corpus, DiscoveryConfig};
use crate::matching::engine::DEFAULT_OUTPUT_DIR;
use crate::matching::{MatchMode, MatchingEngine, RunConfig};
use crate::output::WriteMode;
use crate::parsing::paired::DanglingLine;
use crate::parsing::patterns::read_pattern_file;
use crate::parsing::InputLayout;

#[derive(Args)]
pub struct MatchArgs {
    /// Pattern list, one pattern per line. Use '-' for stdin
    #[arg(required = true)]
    pub patterns: PathBuf,

    /// Output directory, created if needed
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Input file or directory, repeat for several. Directories are filtered with --glob
    #[arg(short, long, default_value = ".")]
    pub inputs: Vec<PathBuf>,

    /// Filename pattern applied to files inside input directories
    #[arg(short, long, default_value = DEFAULT_GLOB)]
    pub glob: String,

    /// How pattern tokens are matched against headers
    #[arg(short, long, value_enum, default_value_t = MatchMode::Regex)]
    pub mode: MatchMode,

    /// How records are laid out in the input files
    #[arg(short, long, value_enum, default_value_t = InputLayout::Fasta)]
    pub layout: InputLayout,

    /// Append to existing output files instead of replacing them
    #[arg(long)]
    pub append: bool,

    /// With --layout paired, drop a trailing header without sequence instead of failing
    #[arg(long)]
    pub lenient: bool,
}

impl MatchArgs {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            output_dir: self.output.clone(),
            mode: self.mode,
            layout: self.layout,
            write_mode: if self.append {
                WriteMode::Append
            } else {
                WriteMode::Overwrite
            },
        }
    }

    fn dangling(&self) -> DanglingLine {
        if self.lenient {
            DanglingLine::Drop
        } else {
            DanglingLine::Error
        }
    }
}

/// Execute match subcommand
///
/// # Errors
///
/// Returns an error if an input is missing, a file cannot be read or parsed,
/// a pattern is not a valid regular expression, or an output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: MatchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let discovery = DiscoveryConfig {
        glob: args.glob.clone(),
    };
    let files = resolve_inputs(&args.inputs, &discovery)?;
    info!("Resolved {} input file(s)", files.len());

    let corpus = Corpus::load(&files, args.layout, args.dangling())?;

    let patterns = read_pattern_file(&args.patterns)
        .with_context(|| format!("Failed to read pattern list {}", args.patterns.display()))?;

    if verbose {
        eprintln!(
            "Matching {} record(s) from {} file(s) against {} pattern(s)",
            corpus.len(),
            files.len(),
            patterns.len()
        );
    }

    let engine = MatchingEngine::new(&corpus, args.run_config());
    let report = engine.run(&patterns)?;

    print_report(&report, format)
}
