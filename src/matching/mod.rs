//! Header matching and the per-pattern filter-and-write engine.
//!
//! - [`Matcher`]: a derived token compiled for a [`MatchMode`]
//! - [`MatchingEngine`]: runs every pattern of a list against a [`Corpus`](crate::corpus::Corpus)
//!
//! ## Match Modes
//!
//! | Mode      | Token `foo` matches header when...          |
//! |-----------|---------------------------------------------|
//! | `regex`   | `foo` is found anywhere as a regex          |
//! | `bracket` | the literal text `\|foo(` appears           |
//!
//! The bracket mode targets headers like
//! `>AB123|Bacteria(2)|Proteobacteria(1224)|Escherichia(561)` where each rank
//! is written as `|name(taxid)`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tinder_fasta::corpus::{resolve_inputs, Corpus, DiscoveryConfig};
//! use tinder_fasta::matching::{MatchingEngine, RunConfig};
//! use tinder_fasta::parsing::paired::DanglingLine;
//! use tinder_fasta::parsing::patterns::read_pattern_file;
//! use std::path::Path;
//!
//! let files = resolve_inputs(&[Path::new("data")], &DiscoveryConfig::default()).unwrap();
//! let config = RunConfig::default();
//! let corpus = Corpus::load(&files, config.layout, DanglingLine::Error).unwrap();
//! let patterns = read_pattern_file(Path::new("patterns.txt")).unwrap();
//!
//! let report = MatchingEngine::new(&corpus, config).run(&patterns).unwrap();
//! for pass in report.passes {
//!     println!("{}: {}", pass.plan.output.display(), pass.matched);
//! }
//! ```

pub mod engine;
pub mod matcher;

pub use engine::{plan, EngineError, MatchingEngine, PassPlan, PassReport, RunConfig, RunReport};
pub use matcher::{MatchMode, Matcher, PatternError};
