use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::core::Record;
use crate::parsing::InputLayout;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What happens when an output file already exists
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Truncate the file; a later pass with the same name replaces earlier ones
    #[default]
    Overwrite,
    /// Add to the end of the file; passes with the same name accumulate
    Append,
}

/// Create the output directory and any missing parents.
///
/// # Errors
///
/// Returns `WriteError::CreateDir` if the directory cannot be created.
pub fn ensure_output_dir(path: &Path) -> Result<(), WriteError> {
    fs::create_dir_all(path).map_err(|source| WriteError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize one record as a header line and a sequence line
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
pub fn write_record<W: Write>(
    writer: &mut W,
    record: &Record,
    layout: InputLayout,
) -> std::io::Result<()> {
    writeln!(writer, "{}", layout.header_line(record))?;
    writeln!(writer, "{}", record.sequence)
}

fn open_output(path: &Path, mode: WriteMode) -> std::io::Result<File> {
    match mode {
        WriteMode::Overwrite => File::create(path),
        WriteMode::Append => OpenOptions::new().create(true).append(true).open(path),
    }
}

/// Write records to `path`, returning how many were written.
///
/// The file is created even when there is nothing to write.
///
/// # Errors
///
/// Returns `WriteError::Io` if the file cannot be opened or written.
pub fn write_records<'a, I>(
    path: &Path,
    records: I,
    layout: InputLayout,
    mode: WriteMode,
) -> Result<usize, WriteError>
where
    I: IntoIterator<Item = &'a Record>,
{
    let io_err = |source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(open_output(path, mode).map_err(io_err)?);
    let mut count = 0;
    for record in records {
        write_record(&mut writer, record, layout).map_err(io_err)?;
        count += 1;
    }
    writer.flush().map_err(io_err)?;

    Ok(count)
}
