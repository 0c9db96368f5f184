//! Output file naming.

use std::path::{Path, PathBuf};

/// Extension given to every output file
pub const OUTPUT_EXTENSION: &str = "fasta";

/// Stem used when a pattern has no alphanumeric character at all
pub const FALLBACK_STEM: &str = "unnamed";

/// Longest slug produced, in bytes; keeps `<slug>.fasta` under common filename limits
pub const MAX_STEM_LEN: usize = 200;

const SEPARATOR: char = '-';

/// Turn arbitrary text into a filesystem-safe slug.
///
/// Non-ASCII text is first transliterated to ASCII. Letters and digits are
/// then kept (lower-cased); every run of any other character becomes a single
/// `-`. Leading and trailing separators are dropped and the slug is cut to
/// [`MAX_STEM_LEN`] bytes. The result is never empty and slugging a slug
/// returns it unchanged.
///
/// # Examples
///
/// ```
/// use tinder_fasta::utils::naming::slugify;
///
/// assert_eq!(slugify("Escherichia coli"), "escherichia-coli");
/// assert_eq!(slugify("^foo.*(bar)$"), "foo-bar");
/// assert_eq!(slugify("Café Müller"), "cafe-muller");
/// assert_eq!(slugify("***"), "unnamed");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let ascii = deunicode::deunicode(text);
    let mut slug = String::with_capacity(ascii.len().min(MAX_STEM_LEN));
    let mut pending_separator = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
            if slug.len() >= MAX_STEM_LEN {
                break;
            }
        } else {
            pending_separator = true;
        }
    }

    // Only ASCII is pushed, so every byte offset is a char boundary
    slug.truncate(MAX_STEM_LEN);
    let trimmed_len = slug.trim_end_matches(SEPARATOR).len();
    slug.truncate(trimmed_len);

    if slug.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        slug
    }
}

/// Output path for a derived token: `<output_dir>/<slug>.fasta`
#[must_use]
pub fn output_path(output_dir: &Path, token: &str) -> PathBuf {
    output_dir.join(format!("{}.{OUTPUT_EXTENSION}", slugify(token)))
}
