use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::core::{Pattern, Record};

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid regular expression {token:?} (from pattern {raw:?}): {source}")]
    InvalidRegex {
        raw: String,
        token: String,
        #[source]
        source: regex::Error,
    },
}

/// How a derived token is tested against a record header
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Unanchored, case-sensitive regular expression search
    #[default]
    Regex,
    /// Literal `|<token>(` substring, for `|`-delimited taxonomy headers
    Bracket,
}

/// A derived token compiled for one [`MatchMode`]
#[derive(Debug, Clone)]
pub enum Matcher {
    Regex(Regex),
    Bracket(String),
}

impl Matcher {
    /// Compile a pattern's token for the given mode.
    ///
    /// # Errors
    ///
    /// Returns `PatternError::InvalidRegex` if the mode is `Regex` and the
    /// token is not a valid regular expression.
    pub fn new(pattern: &Pattern, mode: MatchMode) -> Result<Self, PatternError> {
        match mode {
            MatchMode::Regex => Regex::new(&pattern.token).map(Matcher::Regex).map_err(|source| {
                PatternError::InvalidRegex {
                    raw: pattern.raw.clone(),
                    token: pattern.token.clone(),
                    source,
                }
            }),
            MatchMode::Bracket => Ok(Matcher::Bracket(format!("|{}(", pattern.token))),
        }
    }

    /// Test a header string
    #[must_use]
    pub fn is_match_str(&self, metadata: &str) -> bool {
        match self {
            Matcher::Regex(re) => re.is_match(metadata),
            Matcher::Bracket(needle) => metadata.contains(needle.as_str()),
        }
    }

    /// Test a record. Only the header is considered, never the sequence.
    #[must_use]
    pub fn is_match(&self, record: &Record) -> bool {
        self.is_match_str(&record.metadata)
    }

    /// Lazily keep the matching records, in their original order
    pub fn filter<'a, I>(&'a self, records: I) -> impl Iterator<Item = &'a Record> + 'a
    where
        I: IntoIterator<Item = &'a Record>,
        I::IntoIter: 'a,
    {
        records.into_iter().filter(move |record| self.is_match(record))
    }
}
