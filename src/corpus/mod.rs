//! Input discovery and the in-memory record collection.
//!
//! - [`discovery`]: expand file and directory inputs into a file list
//! - [`Corpus`]: every record of those files, loaded eagerly

pub mod discovery;
pub mod store;

pub use discovery::{resolve_inputs, DiscoveryConfig, DiscoveryError};
pub use store::Corpus;
