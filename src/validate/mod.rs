// SPDX-License-Identifier: PMPL-1.0-or-later

//! Soundboard document validation.
//!
//! One routine covers the three ways the document gets checked: a general
//! structure pass, a read the way the app reads it, and a strict language
//! coverage pass. [`Role`] picks which of those the report is shaped for
//! and the default minimum language count; every role runs the same
//! structural and invariant checks.
//!
//! Findings are collected rather than returned early, so a single run
//! names every broken record and field.

mod checks;

use crate::catalog::{CATEGORY_IDS, LANGUAGES};
use crate::document;
use crate::error::Result;
use crate::storage;
use clap::ValueEnum;
use plist::Value;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Which report the validator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// General structure check with per-category language counts.
    #[default]
    Structure,
    /// Decode the document as the app does and show sample phrases.
    Consumer,
    /// Require full language coverage in every category.
    Coverage,
}

impl Role {
    pub fn default_min_languages(&self) -> usize {
        match self {
            Role::Structure | Role::Consumer => 1,
            Role::Coverage => LANGUAGES.len(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Role::Structure => "structure",
            Role::Consumer => "consumer",
            Role::Coverage => "coverage",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    pub role: Role,
    /// Every category must list at least this many languages in both maps.
    pub min_languages: usize,
    /// Category ids that must be present.
    pub expected_categories: Vec<String>,
    pub require_unique_ids: bool,
}

impl ValidationConfig {
    pub fn for_role(role: Role) -> Self {
        Self {
            role,
            min_languages: role.default_min_languages(),
            expected_categories: CATEGORY_IDS.iter().map(|id| id.to_string()).collect(),
            require_unique_ids: true,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::for_role(Role::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

/// One diagnostic, located by category (id, or `record #n` when the id is
/// unusable) and field where that applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub level: Level,
    pub category: Option<String>,
    pub field: Option<String>,
    pub detail: String,
}

impl Finding {
    fn new(level: Level, category: Option<&str>, field: Option<&str>, detail: String) -> Self {
        Self {
            level,
            category: category.map(str::to_string),
            field: field.map(str::to_string),
            detail,
        }
    }

    pub fn ok(category: &str, detail: impl Into<String>) -> Self {
        Self::new(Level::Ok, Some(category), None, detail.into())
    }

    pub fn warning(category: &str, field: Option<&str>, detail: impl Into<String>) -> Self {
        Self::new(Level::Warn, Some(category), field, detail.into())
    }

    pub fn error(category: Option<&str>, field: Option<&str>, detail: impl Into<String>) -> Self {
        Self::new(Level::Error, category, field, detail.into())
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.category, &self.field) {
            (Some(category), Some(field)) => write!(f, "{}.{}: {}", category, field, self.detail),
            (Some(category), None) => write!(f, "{}: {}", category, self.detail),
            (None, Some(field)) => write!(f, "{}: {}", field, self.detail),
            (None, None) => write!(f, "{}", self.detail),
        }
    }
}

/// Phrase from a non-English language, for the consumer report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateSample {
    pub code: String,
    pub display_name: String,
    pub phrase: String,
}

/// What one record contains, as far as it could be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub id: String,
    /// Display-name language codes, in document order.
    pub languages: Vec<String>,
    pub phrase_languages: usize,
    pub english_name: Option<String>,
    pub english_phrases: usize,
    pub sample: Option<String>,
    pub alternate: Option<AlternateSample>,
}

impl CategorySummary {
    pub fn display_languages(&self) -> usize {
        self.languages.len()
    }

    pub fn has_full_coverage(&self) -> bool {
        self.display_languages() >= LANGUAGES.len() && self.phrase_languages >= LANGUAGES.len()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub path: PathBuf,
    pub role: Role,
    pub min_languages: usize,
    pub file_size: u64,
    pub sha256: String,
    pub categories: Vec<CategorySummary>,
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        !self.findings.iter().any(Finding::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.level == Level::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.level == Level::Warn)
    }

    pub fn category_ids(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.id.as_str()).collect()
    }

    /// Language codes of the first category, which the app treats as the
    /// list of available languages.
    pub fn languages(&self) -> &[String] {
        self.categories
            .first()
            .map(|c| c.languages.as_slice())
            .unwrap_or(&[])
    }

    pub fn language_count(&self) -> usize {
        self.languages().len()
    }
}

/// Read and validate the document at `path`.
///
/// Only fatal problems (missing or unreadable file, not a plist) are
/// returned as errors; everything else lands in the report's findings.
pub fn validate_file(path: &Path, config: &ValidationConfig) -> Result<ValidationReport> {
    let bytes = storage::read_document(path)?;
    validate_bytes(path, &bytes, config)
}

pub fn validate_bytes(path: &Path, bytes: &[u8], config: &ValidationConfig) -> Result<ValidationReport> {
    let document = document::parse_document(path, bytes)?;
    let (categories, mut findings) = validate_document(&document, config);

    if config.role == Role::Consumer {
        match document::decode_categories(path, bytes) {
            Ok(decoded) => debug!(categories = decoded.len(), "app decoder accepted document"),
            Err(e) => findings.push(Finding::error(
                None,
                None,
                format!("app decoder rejected the document: {}", e),
            )),
        }
    }

    let report = ValidationReport {
        path: path.to_path_buf(),
        role: config.role,
        min_languages: config.min_languages,
        file_size: bytes.len() as u64,
        sha256: storage::digest(bytes),
        categories,
        findings,
    };
    if !report.passed() {
        debug!(
            path = %path.display(),
            errors = report.errors().count(),
            "document failed validation"
        );
    }
    Ok(report)
}

/// Check a parsed document. Pure; used by [`validate_bytes`] and tests.
pub fn validate_document(
    document: &Value,
    config: &ValidationConfig,
) -> (Vec<CategorySummary>, Vec<Finding>) {
    let mut findings = Vec::new();
    let mut categories = Vec::new();

    let Some(records) = document.as_array() else {
        findings.push(Finding::error(None, None, "document root must be an array"));
        return (categories, findings);
    };

    if records.is_empty() {
        findings.push(Finding::error(None, None, "document contains no categories"));
    }

    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    for (index, record) in records.iter().enumerate() {
        let outcome = checks::check_record(index, record, config, &mut findings);
        if let Some(id) = &outcome.id {
            *seen.entry(id.clone()).or_default() += 1;
        }
        if let Some(summary) = outcome.summary {
            categories.push(summary);
        }
    }
    debug!(records = records.len(), findings = findings.len(), "records checked");

    if config.require_unique_ids {
        for (id, count) in seen.iter().filter(|(_, count)| **count > 1) {
            findings.push(Finding::error(
                Some(id.as_str()),
                Some(document::KEY_ID),
                format!("id appears {} times", count),
            ));
        }
    }

    for expected in &config.expected_categories {
        if !seen.contains_key(expected) {
            findings.push(Finding::error(
                None,
                None,
                format!("expected category '{}' not found", expected),
            ));
        }
    }

    (categories, findings)
}
