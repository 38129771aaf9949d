// SPDX-License-Identifier: PMPL-1.0-or-later

//! Document generation.
//!
//! The input tables are taken as-is: a language present in one map but not
//! the other is written out unchanged and left for the validator to reject.

use crate::catalog::{CategoryTable, CATEGORIES};
use crate::document;
use crate::error::Result;
use crate::storage;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::info;

/// What a generate run wrote.
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub path: PathBuf,
    pub categories: usize,
    /// Distinct language codes across all display-name maps.
    pub languages: usize,
    pub bytes: usize,
    pub sha256: String,
}

/// Encode `tables` and overwrite `path` with the result.
pub fn generate(path: &Path, tables: &[CategoryTable]) -> Result<GenerateSummary> {
    let bytes = document::encode_document(&document::build_document(tables))?;
    storage::write_document(path, &bytes)?;

    let languages: BTreeSet<&str> = tables
        .iter()
        .flat_map(|t| t.display_names.iter().map(|(code, _)| *code))
        .collect();

    let summary = GenerateSummary {
        path: path.to_path_buf(),
        categories: tables.len(),
        languages: languages.len(),
        bytes: bytes.len(),
        sha256: storage::digest(&bytes),
    };
    info!(
        path = %summary.path.display(),
        categories = summary.categories,
        languages = summary.languages,
        "generated soundboard document"
    );
    Ok(summary)
}

/// Generate the built-in catalog.
pub fn generate_default(path: &Path) -> Result<GenerateSummary> {
    generate(path, CATEGORIES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use tempfile::TempDir;

    #[test]
    fn default_catalog_summary() {
        let dir = TempDir::new().expect("tempdir should create");
        let path = dir.path().join("SoundboardCategories.plist");
        let summary = generate_default(&path).expect("generate should succeed");

        assert_eq!(summary.categories, 5);
        assert_eq!(summary.languages, 28);
        assert_eq!(summary.bytes as u64, path.metadata().unwrap().len());
        assert_eq!(summary.sha256.len(), 64);
    }

    #[test]
    fn write_failure_reaches_the_caller() {
        let dir = TempDir::new().expect("tempdir should create");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = generate_default(&blocker.join("sub/doc.plist")).unwrap_err();
        match err {
            CatalogError::Io { path, .. } => assert_eq!(path, blocker.join("sub")),
            other => panic!("expected an I/O error, got {:?}", other),
        }
        assert_eq!(std::fs::read_to_string(&blocker).unwrap(), "not a directory");
    }

    #[test]
    fn mismatched_tables_are_written_unchecked() {
        const LOPSIDED: CategoryTable = CategoryTable {
            id: "lopsided",
            display_names: &[("en", "Lopsided")],
            phrases: &[("en", &["One"]), ("fr", &["Un"])],
        };
        let dir = TempDir::new().expect("tempdir should create");
        let path = dir.path().join("lopsided.plist");
        let summary = generate(&path, &[LOPSIDED]).expect("generate does not validate");
        assert_eq!(summary.categories, 1);
        assert_eq!(summary.languages, 1);
    }
}
