use serde::Serialize;

/// Character separating a pattern's prefix from the token used for matching
pub const TOKEN_SEPARATOR: char = '_';

/// Derive the matching token from a raw pattern string.
///
/// The raw string is trimmed, then everything up to and including the last
/// `_` is discarded. A pattern without `_` is used whole.
///
/// # Examples
///
/// ```
/// use tinder_fasta::core::pattern::derive_token;
///
/// assert_eq!(derive_token("  alpha_beta_foo \n"), "foo");
/// assert_eq!(derive_token("foo"), "foo");
/// assert_eq!(derive_token("abc_"), "");
/// ```
#[must_use]
pub fn derive_token(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.rsplit_once(TOKEN_SEPARATOR) {
        Some((_, suffix)) => suffix,
        None => trimmed,
    }
}

/// A user-supplied pattern together with its derived token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pattern {
    /// The pattern as written in the pattern list (trimmed)
    pub raw: String,

    /// Suffix after the last `_`, the value actually matched against headers
    pub token: String,
}

impl Pattern {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.trim().to_string(),
            token: derive_token(raw).to_string(),
        }
    }
}
