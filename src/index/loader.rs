//! Locating and reading index files on disk

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IndexError, Result};

/// Directory holding generated indices and shell state (`~/.aws/shell`).
pub fn default_index_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".aws")
        .join("shell")
}

/// File name for an index generated for a given CLI version.
///
/// # Arguments
/// * `version` - Version string of the wrapped CLI
/// * `kind` - Index kind (`completions`, `docs`)
pub fn index_filename(version: &str, kind: &str) -> PathBuf {
    default_index_dir().join(format!("{version}-{kind}.json"))
}

/// Read an index file into memory.
pub fn load_index_file(path: &Path) -> Result<String> {
    debug!("Loading index from {}", path.display());
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IndexError::NotFound(path.display().to_string()).into(),
        _ => e.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_filename_layout() {
        let path = index_filename("1.10.0", "completions");
        assert!(path.ends_with(".aws/shell/1.10.0-completions.json"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_index_file(Path::new("/nonexistent/aws-shell/index.json")).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ShellError::Index(IndexError::NotFound(_))
        ));
    }
}
