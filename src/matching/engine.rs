use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::corpus::Corpus;
use crate::core::Pattern;
use crate::matching::matcher::{MatchMode, Matcher, PatternError};
use crate::output::{ensure_output_dir, write_records, WriteError, WriteMode};
use crate::parsing::InputLayout;
use crate::utils::naming::output_path;

/// Default directory receiving the per-pattern files
pub const DEFAULT_OUTPUT_DIR: &str = "outputs/";

#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Configuration for a matching run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory receiving one file per pattern
    pub output_dir: PathBuf,
    /// How tokens are tested against headers
    pub mode: MatchMode,
    /// Layout the corpus was read with; decides how headers are written back
    pub layout: InputLayout,
    /// Whether recurring output names replace or extend each other
    pub write_mode: WriteMode,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            mode: MatchMode::default(),
            layout: InputLayout::default(),
            write_mode: WriteMode::default(),
        }
    }
}

/// Where one pattern-list entry will be written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassPlan {
    /// Pattern as written in the list
    pub pattern: String,
    /// Token actually matched
    pub token: String,
    /// Output file
    pub output: PathBuf,
}

impl PassPlan {
    pub fn new(pattern: &Pattern, output_dir: &Path) -> Self {
        Self {
            pattern: pattern.raw.clone(),
            token: pattern.token.clone(),
            output: output_path(output_dir, &pattern.token),
        }
    }
}

/// Outcome of one filter-and-write pass
#[derive(Debug, Clone, Serialize)]
pub struct PassReport {
    #[serde(flatten)]
    pub plan: PassPlan,
    /// Records written by this pass
    pub matched: usize,
}

/// Outcome of a whole run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Number of input files read
    pub files: usize,
    /// Number of records in the corpus
    pub records: usize,
    pub mode: MatchMode,
    pub write_mode: WriteMode,
    pub passes: Vec<PassReport>,
}

/// Compute the output file of every pattern without touching any file.
#[must_use]
pub fn plan(patterns: &[Pattern], output_dir: &Path) -> Vec<PassPlan> {
    patterns
        .iter()
        .map(|pattern| PassPlan::new(pattern, output_dir))
        .collect()
}

/// Runs every pattern of a list against a loaded corpus
pub struct MatchingEngine<'a> {
    corpus: &'a Corpus,
    config: RunConfig,
}

impl<'a> MatchingEngine<'a> {
    pub fn new(corpus: &'a Corpus, config: RunConfig) -> Self {
        Self { corpus, config }
    }

    /// Filter the corpus with each pattern in order and write one file per pass.
    ///
    /// Every pattern is compiled before the output directory is created, so
    /// an invalid expression leaves the filesystem untouched. Patterns are not
    /// deduplicated.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Pattern` for a token that does not compile, or
    /// `EngineError::Write` if the output directory or a file cannot be
    /// written. Files written by earlier passes are left in place.
    pub fn run(&self, patterns: &[Pattern]) -> Result<RunReport, EngineError> {
        let matchers = patterns
            .iter()
            .map(|pattern| Matcher::new(pattern, self.config.mode))
            .collect::<Result<Vec<_>, _>>()?;

        ensure_output_dir(&self.config.output_dir)?;

        let mut seen: HashSet<PathBuf> = HashSet::new();
        let mut passes = Vec::with_capacity(patterns.len());

        for (pattern, matcher) in patterns.iter().zip(&matchers) {
            let plan = PassPlan::new(pattern, &self.config.output_dir);

            if !seen.insert(plan.output.clone()) && self.config.write_mode == WriteMode::Overwrite
            {
                warn!(
                    "Pattern {:?} writes to {} again; earlier matches are replaced",
                    pattern.raw,
                    plan.output.display()
                );
            }

            let matched = write_records(
                &plan.output,
                matcher.filter(self.corpus),
                self.config.layout,
                self.config.write_mode,
            )?;
            debug!(
                "Pattern {:?} (token {:?}): {matched} record(s) -> {}",
                pattern.raw,
                pattern.token,
                plan.output.display()
            );

            passes.push(PassReport { plan, matched });
        }

        info!(
            "Wrote {} pass(es) to {}",
            passes.len(),
            self.config.output_dir.display()
        );

        Ok(RunReport {
            files: self.corpus.files.len(),
            records: self.corpus.len(),
            mode: self.config.mode,
            write_mode: self.config.write_mode,
            passes,
        })
    }
}
