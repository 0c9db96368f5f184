//! # tinder-fasta
//!
//! Split FASTA records into one output file per header pattern.
//!
//! Given a set of FASTA files and a list of patterns, every pattern gets its
//! own `<slug>.fasta` file holding the records whose header matches it. Only
//! the part of a pattern after its last `_` is matched, so lists of taxonomic
//! labels (`g__Escherichia`, `s__coli`) can be used directly.
//!
//! ## Features
//!
//! - **Regex matching**: Search headers with a regular expression per pattern
//! - **Bracket matching**: Literal `|name(` lookup for `|name(taxid)` style headers
//! - **Two input layouts**: Standard multi-line FASTA or strict two-line records
//! - **Directory inputs**: Expand directories with a glob (default `*.fna`)
//! - **Safe file names**: Patterns are slugged before becoming file names
//!
//! ## Example
//!
//! ```rust
//! use tinder_fasta::{Matcher, MatchMode, Pattern, Record};
//!
//! let records = vec![
//!     Record::new(">seq1_foo(bar)", "ACGT"),
//!     Record::new(">seq2_baz(qux)", "TTTT"),
//! ];
//!
//! let matcher = Matcher::new(&Pattern::new("alpha_foo"), MatchMode::Regex).unwrap();
//! let matched: Vec<&Record> = matcher.filter(&records).collect();
//! assert_eq!(matched, vec![&records[0]]);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Record and pattern types
//! - [`parsing`]: FASTA, two-line and pattern list parsers
//! - [`corpus`]: Input discovery and the in-memory record collection
//! - [`matching`]: Matchers and the per-pattern engine
//! - [`output`]: Writing matched records
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod corpus;
pub mod matching;
pub mod output;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use corpus::Corpus;
pub use core::pattern::Pattern;
pub use core::record::Record;
pub use matching::engine::{MatchingEngine, RunConfig, RunReport};
pub use matching::matcher::{MatchMode, Matcher};
