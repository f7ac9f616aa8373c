//! Filesystem locations used by the provisioner.

use crate::error::{ProvisionError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory name for saved documents, under the invoking user's home.
pub const DOCS_DIR_NAME: &str = "etyper_docs";

/// Resolve the documents directory: `$HOME/etyper_docs`.
pub fn docs_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ProvisionError::environment("could not determine home directory"))?;
    Ok(home.join(DOCS_DIR_NAME))
}

/// Ensure a directory exists, creating intermediate components as needed.
///
/// A directory that already exists is left untouched, contents included.
/// Errors only on real filesystem failure (permissions, or the path exists
/// but is not a directory).
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        debug!("directory already present: {}", path.display());
        return Ok(());
    }
    fs::create_dir_all(path)?;
    info!("created directory: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dir_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("a").join("b").join("docs");
        ensure_dir(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_ensure_dir_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("docs");
        ensure_dir(&target).unwrap();
        ensure_dir(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_ensure_dir_preserves_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("docs");
        ensure_dir(&target).unwrap();
        fs::write(target.join("draft.txt"), "hello").unwrap();

        ensure_dir(&target).unwrap();
        let content = fs::read_to_string(target.join("draft.txt")).unwrap();
        assert_eq!(content, "hello");
    }

    #[test]
    fn test_ensure_dir_rejects_file_at_path() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("docs");
        fs::write(&target, "not a directory").unwrap();
        assert!(ensure_dir(&target).is_err());
    }

    #[test]
    fn test_docs_dir_under_home() {
        let dir = docs_dir().unwrap();
        assert!(dir.ends_with(DOCS_DIR_NAME));
    }
}
