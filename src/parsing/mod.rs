//! Parsers turning input text into [`Record`](crate::core::Record)s.
//!
//! Two input layouts are supported:
//!
//! - **FASTA** ([`fasta`]): records start at lines beginning with `>`; every
//!   following line up to the next header is part of the sequence. This is the
//!   default layout.
//! - **Paired lines** ([`paired`]): strictly two physical lines per record,
//!   header then sequence. Used for pre-linearized batch files.
//!
//! The pattern list format is handled by [`patterns`].
//!
//! Gzip-compressed inputs (`.gz`, `.bgz`) are decompressed transparently.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use serde::Serialize;
use thiserror::Error;

use crate::core::Record;

pub mod fasta;
pub mod paired;
pub mod patterns;

/// Marker character opening a FASTA header line
pub const HEADER_MARKER: char = '>';

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Header line without a sequence line at end of input: {0:?}")]
    DanglingHeader(String),

    #[error("{}: {source}", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Attach the path of the file being read to this error
    #[must_use]
    pub fn in_file(self, path: &Path) -> Self {
        match self {
            already @ ParseError::InFile { .. } => already,
            other => ParseError::InFile {
                path: path.to_path_buf(),
                source: Box::new(other),
            },
        }
    }
}

/// How records are laid out in the input files
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputLayout {
    /// Marker-delimited records with multi-line sequences
    #[default]
    Fasta,
    /// Exactly two lines per record: header, then sequence
    Paired,
}

impl InputLayout {
    /// The header line to write back for a record read with this layout.
    ///
    /// FASTA parsing strips the `>` marker so it is restored here; paired-line
    /// headers are kept verbatim.
    #[must_use]
    pub fn header_line(self, record: &Record) -> Cow<'_, str> {
        match self {
            InputLayout::Fasta => Cow::Owned(format!("{HEADER_MARKER}{}", record.metadata)),
            InputLayout::Paired => Cow::Borrowed(record.metadata.as_str()),
        }
    }
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a file for buffered line reading, decompressing gzip input.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened.
pub fn open_reader(path: &Path) -> Result<Box<dyn BufRead>, ParseError> {
    let file = File::open(path)?;
    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
