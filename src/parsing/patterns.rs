//! Parser for pattern list files (one pattern per line).

use std::io::{self, BufRead};
use std::path::Path;

use tracing::debug;

use crate::core::Pattern;
use crate::parsing::{open_reader, ParseError};

/// Parse a pattern list from a reader.
///
/// Blank lines are skipped. Every other line is kept, duplicates included and
/// in order. A line such as `abc_` yields an empty token, which still runs its
/// own pass.
///
/// # Errors
///
/// Returns `ParseError::Io` if the reader fails.
pub fn parse_pattern_list<R: BufRead>(reader: R) -> Result<Vec<Pattern>, ParseError> {
    let mut patterns = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            debug!("Skipping blank pattern line {}", line_num + 1);
            continue;
        }

        patterns.push(Pattern::new(&line));
    }

    Ok(patterns)
}

/// Read a pattern list file. A path of `-` reads from stdin.
///
/// # Errors
///
/// Returns `ParseError::InFile` if the file cannot be read.
pub fn read_pattern_file(path: &Path) -> Result<Vec<Pattern>, ParseError> {
    if path.to_string_lossy() == "-" {
        return parse_pattern_list(io::stdin().lock());
    }

    let reader = open_reader(path).map_err(|e| e.in_file(path))?;
    parse_pattern_list(reader).map_err(|e| e.in_file(path))
}
