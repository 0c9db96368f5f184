//! Two-lines-per-record parsing.
//!
//! Even lines (0-based) are headers and each following odd line is the
//! sequence. Multi-line sequences are not supported by this layout.

use std::io::BufRead;
use std::path::Path;

use tracing::warn;

use crate::core::Record;
use crate::parsing::{open_reader, ParseError};

/// What to do with a header line left without a sequence at end of input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DanglingLine {
    /// Fail with `ParseError::DanglingHeader`
    #[default]
    Error,
    /// Drop the line and log a warning
    Drop,
}

/// Lazy iterator pairing consecutive lines into records
pub struct PairedRecords<I> {
    lines: I,
    dangling: DanglingLine,
}

impl<I, S> PairedRecords<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(lines: I, dangling: DanglingLine) -> Self {
        Self { lines, dangling }
    }
}

impl<I, S> Iterator for PairedRecords<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<Record, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let metadata = self.lines.next()?;
        match self.lines.next() {
            Some(sequence) => Some(Ok(Record::new(metadata, sequence))),
            None => {
                let line = metadata.as_ref().trim().to_string();
                match self.dangling {
                    DanglingLine::Error => Some(Err(ParseError::DanglingHeader(line))),
                    DanglingLine::Drop => {
                        warn!("Dropping trailing header line without sequence: {line:?}");
                        None
                    }
                }
            }
        }
    }
}

/// Read all lines of a file, decompressing gzip input.
///
/// # Errors
///
/// Returns `ParseError::InFile` if the file cannot be opened or read.
pub fn read_lines(path: &Path) -> Result<Vec<String>, ParseError> {
    let reader = open_reader(path).map_err(|e| e.in_file(path))?;
    reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ParseError::from(e).in_file(path))
}

/// Pair the lines of several files, concatenated in the given order.
///
/// Lines are pooled before pairing, so a record may straddle two files when
/// one of them has an odd line count.
///
/// # Errors
///
/// Returns `ParseError::InFile` if a file cannot be read, or
/// `ParseError::DanglingHeader` for an odd total line count under
/// [`DanglingLine::Error`].
pub fn parse_paired_files<P: AsRef<Path>>(
    paths: &[P],
    dangling: DanglingLine,
) -> Result<Vec<Record>, ParseError> {
    let mut lines = Vec::new();
    for path in paths {
        lines.extend(read_lines(path.as_ref())?);
    }
    PairedRecords::new(lines.into_iter(), dangling).collect()
}
