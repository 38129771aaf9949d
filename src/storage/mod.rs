// SPDX-License-Identifier: PMPL-1.0-or-later

//! Filesystem helpers for the generated document

use crate::error::{CatalogError, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default location of the document, relative to the working directory.
pub const DEFAULT_DOCUMENT_PATH: &str = "Resources/SoundboardCategories.plist";

/// Overwrite `path` with `bytes`, creating the parent directory if needed.
pub fn write_document(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
    }
    fs::write(path, bytes).map_err(|e| CatalogError::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "document written");
    Ok(())
}

pub fn read_document(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).map_err(|e| CatalogError::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "document read");
    Ok(bytes)
}

/// Lowercase hex SHA-256 of `bytes`.
pub fn digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_creates_parent_and_overwrites() {
        let dir = TempDir::new().expect("tempdir should create");
        let path = dir.path().join("Resources/nested/doc.plist");

        write_document(&path, b"first").expect("first write");
        write_document(&path, b"second").expect("second write");
        assert_eq!(read_document(&path).expect("read back"), b"second");
    }

    #[test]
    fn read_missing_is_not_found() {
        let dir = TempDir::new().expect("tempdir should create");
        let err = read_document(&dir.path().join("absent.plist")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn digest_is_stable_hex() {
        assert_eq!(
            digest(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
