// SPDX-License-Identifier: PMPL-1.0-or-later

//! Optional YAML configuration.
//!
//! Every field is optional. Command-line flags (and their environment
//! variables) override the file; the file overrides built-in defaults.
//!
//! ```yaml
//! document: ios/Resources/SoundboardCategories.plist
//! min_languages: 28
//! expected_categories: [greetings, needs, comfort, feelings, responses]
//! require_unique_ids: true
//! ```

use crate::error::{CatalogError, Result};
use crate::storage::DEFAULT_DOCUMENT_PATH;
use crate::validate::{Role, ValidationConfig};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "soundboard.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub document: Option<PathBuf>,
    pub min_languages: Option<usize>,
    pub expected_categories: Option<Vec<String>>,
    pub require_unique_ids: Option<bool>,
}

/// Validation settings given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ValidateOverrides {
    pub min_languages: Option<usize>,
    /// Replaces the expected category list when non-empty.
    pub expected_categories: Vec<String>,
    pub allow_duplicate_ids: bool,
}

impl CatalogConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        let config: Self = serde_yaml::from_str(&raw).map_err(|e| CatalogError::Config {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `explicit` if given (it must exist), otherwise
    /// [`DEFAULT_CONFIG_FILE`] if present, otherwise defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn document_path(&self, cli: Option<&Path>) -> PathBuf {
        cli.map(Path::to_path_buf)
            .or_else(|| self.document.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCUMENT_PATH))
    }

    pub fn validation(&self, role: Role, overrides: &ValidateOverrides) -> ValidationConfig {
        let mut config = ValidationConfig::for_role(role);
        if let Some(min) = overrides.min_languages.or(self.min_languages) {
            config.min_languages = min;
        }
        if !overrides.expected_categories.is_empty() {
            config.expected_categories = overrides.expected_categories.clone();
        } else if let Some(expected) = &self.expected_categories {
            config.expected_categories = expected.clone();
        }
        config.require_unique_ids = !overrides.allow_duplicate_ids
            && self.require_unique_ids.unwrap_or(config.require_unique_ids);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_all_fields() {
        let dir = TempDir::new().expect("tempdir should create");
        let path = dir.path().join("soundboard.yaml");
        fs::write(
            &path,
            "document: out/Soundboard.plist\nmin_languages: 3\nexpected_categories: [needs]\nrequire_unique_ids: false\n",
        )
        .unwrap();

        let config = CatalogConfig::load(&path).expect("config should parse");
        assert_eq!(config.document, Some(PathBuf::from("out/Soundboard.plist")));
        assert_eq!(config.min_languages, Some(3));
        assert_eq!(config.expected_categories, Some(vec!["needs".to_string()]));
        assert_eq!(config.require_unique_ids, Some(false));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().expect("tempdir should create");
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "documnet: typo.plist\n").unwrap();
        let err = CatalogConfig::load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Config { .. }));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().expect("tempdir should create");
        let err = CatalogConfig::discover(Some(&dir.path().join("nope.yaml"))).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn flag_beats_file_beats_default() {
        let file = CatalogConfig {
            document: Some(PathBuf::from("from-file.plist")),
            ..CatalogConfig::default()
        };
        assert_eq!(
            file.document_path(Some(Path::new("from-flag.plist"))),
            PathBuf::from("from-flag.plist")
        );
        assert_eq!(file.document_path(None), PathBuf::from("from-file.plist"));
        assert_eq!(
            CatalogConfig::default().document_path(None),
            PathBuf::from(DEFAULT_DOCUMENT_PATH)
        );
    }

    #[test]
    fn validation_merges_overrides() {
        let file = CatalogConfig {
            min_languages: Some(10),
            expected_categories: Some(vec!["needs".to_string()]),
            require_unique_ids: Some(true),
            ..CatalogConfig::default()
        };

        let merged = file.validation(Role::Coverage, &ValidateOverrides::default());
        assert_eq!(merged.min_languages, 10);
        assert_eq!(merged.expected_categories, ["needs"]);
        assert!(merged.require_unique_ids);

        let overrides = ValidateOverrides {
            min_languages: Some(2),
            expected_categories: vec!["comfort".to_string()],
            allow_duplicate_ids: true,
        };
        let merged = file.validation(Role::Structure, &overrides);
        assert_eq!(merged.min_languages, 2);
        assert_eq!(merged.expected_categories, ["comfort"]);
        assert!(!merged.require_unique_ids);

        let defaults = CatalogConfig::default().validation(Role::Coverage, &ValidateOverrides::default());
        assert_eq!(defaults, ValidationConfig::for_role(Role::Coverage));
    }
}
