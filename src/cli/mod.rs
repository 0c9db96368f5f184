//! Command-line interface for tinder-fasta.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **match**: Split FASTA records into one file per matching pattern
//! - **plan**: Show the token and output file each pattern would use
//!
//! ## Usage
//!
//! ```text
//! # Every *.fna file under data/, regex matching, files in outputs/
//! tinder-fasta match patterns.txt -i data/
//!
//! # Taxonomy headers written as |name(taxid), two lines per record
//! tinder-fasta match patterns.txt -i data/ --mode bracket --layout paired --append
//!
//! # JSON summary for scripting
//! tinder-fasta --format json match patterns.txt -i reads.fa
//!
//! # Check output names before running
//! cat patterns.txt | tinder-fasta plan -
//! ```

use clap::{Parser, Subcommand};

use crate::matching::RunReport;

pub mod match_cmd;
pub mod plan;

#[derive(Parser)]
#[command(name = "tinder-fasta")]
#[command(version)]
#[command(about = "Split FASTA records into one file per matching header pattern")]
#[command(
    long_about = "tinder-fasta reads FASTA records from files or directories and, for every line of a pattern list, writes the records whose header matches that pattern to <output>/<pattern>.fasta.\n\nOnly the part of each pattern after its last '_' is matched, so taxonomic labels such as g__Escherichia can be used as-is."
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
    /// Write the records matching each pattern to their own file
    Match(match_cmd::MatchArgs),

    /// Show the derived token and output file of each pattern
    Plan(plan::PlanArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Print a run summary in the requested format
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn print_report(report: &RunReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!(
                "Read {} record(s) from {} file(s)",
                report.records, report.files
            );
            for pass in &report.passes {
                println!(
                    "  {:>8}  {}  ({})",
                    pass.matched,
                    pass.plan.output.display(),
                    pass.plan.pattern
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Tsv => {
            println!("pattern\ttoken\toutput\tmatched");
            for pass in &report.passes {
                println!(
                    "{}\t{}\t{}\t{}",
                    pass.plan.pattern,
                    pass.plan.token,
                    pass.plan.output.display(),
                    pass.matched
                );
            }
        }
    }

    Ok(())
}
