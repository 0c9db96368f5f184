//! Marker-delimited FASTA parsing using noodles.
//!
//! Each record starts at a line beginning with `>`. The header is stored
//! without the marker and surrounding whitespace; all lines up to the next
//! header are concatenated into the sequence with whitespace removed. Text
//! before the first header is skipped.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::io::BufRead;
use std::path::Path;

use noodles::fasta;
use tracing::warn;

use crate::core::Record;
use crate::parsing::{open_reader, ParseError, HEADER_MARKER};

/// Lazy iterator over the records of a FASTA stream
pub struct FastaRecords<R> {
    reader: fasta::io::Reader<R>,
    definition: String,
    sequence: Vec<u8>,
    done: bool,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: fasta::io::Reader::new(inner),
            definition: String::new(),
            sequence: Vec::new(),
            done: false,
        }
    }

    fn read_record(&mut self) -> Result<Option<Record>, ParseError> {
        // Only text before the first header can reach here without a marker
        let metadata = loop {
            self.definition.clear();
            if self.reader.read_definition(&mut self.definition)? == 0 {
                return Ok(None);
            }
            let line = self.definition.trim();
            if let Some(header) = line.strip_prefix(HEADER_MARKER) {
                break header.trim().to_string();
            }
            if !line.is_empty() {
                warn!("Skipping text before the first header line: {line:?}");
            }
        };

        self.sequence.clear();
        self.reader.read_sequence(&mut self.sequence)?;
        self.sequence.retain(|b| !b.is_ascii_whitespace());
        let sequence = String::from_utf8_lossy(&self.sequence);

        Ok(Some(Record::new(metadata, sequence)))
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = Result<Record, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Read every record of a FASTA file.
///
/// # Errors
///
/// Returns `ParseError::InFile` wrapping `ParseError::Io` if the file cannot
/// be read.
pub fn parse_fasta_file(path: &Path) -> Result<Vec<Record>, ParseError> {
    let reader = open_reader(path).map_err(|e| e.in_file(path))?;
    FastaRecords::new(reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.in_file(path))
}
