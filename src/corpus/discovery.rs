//! Resolve user-supplied inputs into the list of files to parse.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Default filter applied to directory inputs
pub const DEFAULT_GLOB: &str = "*.fna";

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Invalid glob pattern {pattern:?}: {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to list directory {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration for input discovery
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Filename pattern used when expanding directory inputs
    pub glob: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            glob: DEFAULT_GLOB.to_string(),
        }
    }
}

/// Expand inputs into an ordered list of files.
///
/// Every input must exist; this is checked for all of them before any
/// directory is listed. File inputs are kept as given. Directory inputs are
/// replaced by the regular files directly inside them whose name matches the
/// glob, sorted by path. Input order is otherwise preserved.
///
/// # Errors
///
/// Returns `DiscoveryError::InputNotFound` for a missing input,
/// `DiscoveryError::InvalidGlob` for a malformed glob, or
/// `DiscoveryError::Io` if a directory cannot be listed.
pub fn resolve_inputs<P: AsRef<Path>>(
    inputs: &[P],
    config: &DiscoveryConfig,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    if let Some(missing) = inputs.iter().map(AsRef::<Path>::as_ref).find(|p| !p.exists()) {
        return Err(DiscoveryError::InputNotFound(missing.to_path_buf()));
    }

    let pattern =
        glob::Pattern::new(&config.glob).map_err(|source| DiscoveryError::InvalidGlob {
            pattern: config.glob.clone(),
            source,
        })?;

    let mut files = Vec::new();
    for input in inputs.iter().map(AsRef::<Path>::as_ref) {
        if input.is_dir() {
            let found = list_matching_files(input, &pattern)?;
            debug!(
                "Found {} file(s) matching {:?} in {}",
                found.len(),
                config.glob,
                input.display()
            );
            files.extend(found);
        } else {
            files.push(input.to_path_buf());
        }
    }

    Ok(files)
}

fn list_matching_files(
    dir: &Path,
    pattern: &glob::Pattern,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let io_err = |source| DiscoveryError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let matches = path
            .file_name()
            .is_some_and(|name| pattern.matches(&name.to_string_lossy()));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, ">a\nAC\n").unwrap();
        path
    }

    #[test]
    fn test_directory_expanded_with_glob_sorted() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b.fna");
        touch(dir.path(), "a.fna");
        touch(dir.path(), "c.txt");
        fs::create_dir(dir.path().join("nested.fna")).unwrap();

        let files = resolve_inputs(&[dir.path()], &DiscoveryConfig::default()).unwrap();
        assert_eq!(files, vec![dir.path().join("a.fna"), dir.path().join("b.fna")]);
    }

    #[test]
    fn test_file_inputs_kept_in_order() {
        let dir = TempDir::new().unwrap();
        let second = touch(dir.path(), "z.txt");
        let first = touch(dir.path(), "a.txt");

        let files =
            resolve_inputs(&[second.clone(), first.clone()], &DiscoveryConfig::default()).unwrap();
        assert_eq!(files, vec![second, first]);
    }

    #[test]
    fn test_missing_input_rejected() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.fna");
        let inputs = [dir.path().to_path_buf(), missing.clone()];
        let result = resolve_inputs(&inputs, &DiscoveryConfig::default());
        assert!(matches!(result, Err(DiscoveryError::InputNotFound(p)) if p == missing));
    }

    #[test]
    fn test_no_matching_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "reads.fastq");
        let files = resolve_inputs(&[dir.path()], &DiscoveryConfig::default()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_custom_glob() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.fa");
        touch(dir.path(), "b.fna");
        let config = DiscoveryConfig {
            glob: "*.fa".to_string(),
        };
        let files = resolve_inputs(&[dir.path()], &config).unwrap();
        assert_eq!(files, vec![dir.path().join("a.fa")]);
    }

    #[test]
    fn test_invalid_glob() {
        let dir = TempDir::new().unwrap();
        let config = DiscoveryConfig {
            glob: "[".to_string(),
        };
        let result = resolve_inputs(&[dir.path()], &config);
        assert!(matches!(result, Err(DiscoveryError::InvalidGlob { .. })));
    }
}
