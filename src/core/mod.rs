//! Core data types shared by the parsers, matcher and writer.
//!
//! - [`Record`]: One header line and its sequence payload
//! - [`Pattern`]: A raw pattern-list entry and the token derived from it
//!
//! ## Pattern Tokens
//!
//! Pattern lists are often built from taxonomic labels such as `g__Escherichia`
//! or `sample_ABC123`. Only the part after the last `_` is matched:
//!
//! | Raw pattern       | Token         |
//! |-------------------|---------------|
//! | `alpha_foo`       | `foo`         |
//! | `g__Escherichia`  | `Escherichia` |
//! | `coli`            | `coli`        |

pub mod pattern;
pub mod record;

pub use pattern::{derive_token, Pattern};
pub use record::Record;
