//! Serialization of matched records into per-pattern FASTA files.

pub mod writer;

pub use writer::{ensure_output_dir, write_records, WriteError, WriteMode};
