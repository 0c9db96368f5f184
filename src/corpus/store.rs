use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::Record;
use crate::parsing::fasta::parse_fasta_file;
use crate::parsing::paired::{parse_paired_files, DanglingLine};
use crate::parsing::{InputLayout, ParseError};

/// All records of one run, held in memory in file then record order
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Files the records were read from, in read order
    pub files: Vec<PathBuf>,

    /// Records in encounter order
    pub records: Vec<Record>,
}

impl Corpus {
    pub fn new(files: Vec<PathBuf>, records: Vec<Record>) -> Self {
        Self { files, records }
    }

    /// Load every record from the given files.
    ///
    /// `dangling` only applies to [`InputLayout::Paired`].
    ///
    /// # Errors
    ///
    /// Returns the first `ParseError` met; nothing is returned for the files
    /// that did parse.
    pub fn load<P: AsRef<Path>>(
        files: &[P],
        layout: InputLayout,
        dangling: DanglingLine,
    ) -> Result<Self, ParseError> {
        let records = match layout {
            InputLayout::Fasta => {
                let mut records = Vec::new();
                for path in files {
                    let parsed = parse_fasta_file(path.as_ref())?;
                    debug!("Read {} record(s) from {}", parsed.len(), path.as_ref().display());
                    records.extend(parsed);
                }
                records
            }
            InputLayout::Paired => parse_paired_files(files, dangling)?,
        };

        info!(
            "Loaded {} record(s) from {} file(s)",
            records.len(),
            files.len()
        );

        Ok(Self::new(
            files.iter().map(|p| p.as_ref().to_path_buf()).collect(),
            records,
        ))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
