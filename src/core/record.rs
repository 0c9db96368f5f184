use serde::Serialize;

/// A single header + sequence pair read from an input file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Header line, without trailing line terminators
    pub metadata: String,

    /// Sequence payload; multi-line payloads are joined with no separator
    pub sequence: String,
}

impl Record {
    /// Build a record, stripping surrounding whitespace from both fields.
    pub fn new(metadata: impl AsRef<str>, sequence: impl AsRef<str>) -> Self {
        Self {
            metadata: metadata.as_ref().trim().to_string(),
            sequence: sequence.as_ref().trim().to_string(),
        }
    }

    /// Length of the sequence payload in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
