// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console formatting for validation and generation results

use crate::catalog::LANGUAGES;
use crate::generate::GenerateSummary;
use crate::i18n::{language_name, native_name};
use crate::validate::{CategorySummary, Finding, Level, Role, ValidationReport};
use anyhow::Result;
use colored::*;
use std::fs;
use std::path::Path;

/// Language codes listed before the summary elides the rest.
const SHOWN_LANGUAGES: usize = 5;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, report: &ValidationReport) -> String {
        let mut out = Vec::new();
        out.push(format!(
            "{} {}",
            "=== SOUNDBOARD DOCUMENT CHECK ===".bold().cyan(),
            format!("({})", report.role.name()).dimmed()
        ));
        out.push(format!("  Document: {}", report.path.display()));
        out.push(format!("  Categories found: {}", report.categories.len()));
        out.push(String::new());

        out.push(format!("{}", "CHECKS".bold().yellow()));
        for finding in &report.findings {
            out.push(format!("  {}", self.finding_line(finding)));
        }
        out.push(String::new());

        match report.role {
            Role::Structure => self.structure_lines(report, &mut out),
            Role::Consumer => self.consumer_lines(report, &mut out),
            Role::Coverage => self.coverage_lines(report, &mut out),
        }
        out.push(String::new());

        self.summary_lines(report, &mut out);
        out.push(String::new());

        let errors = report.errors().count();
        let warnings = report.warnings().count();
        if report.passed() {
            out.push(format!(
                "{} ({} warnings)",
                "PASSED: all checks passed".green().bold(),
                warnings
            ));
        } else {
            out.push(format!(
                "{} ({} errors, {} warnings)",
                "FAILED".red().bold(),
                errors,
                warnings
            ));
        }
        out.join("\n")
    }

    pub fn print(&self, report: &ValidationReport) {
        println!("{}", self.render(report));
    }

    fn finding_line(&self, finding: &Finding) -> String {
        let tag = match finding.level {
            Level::Ok => finding.level.tag().green(),
            Level::Warn => finding.level.tag().yellow(),
            Level::Error => finding.level.tag().red().bold(),
        };
        format!("[{}] {}", tag, finding)
    }

    fn structure_lines(&self, report: &ValidationReport, out: &mut Vec<String>) {
        out.push(format!("{}", "LANGUAGES PER CATEGORY".bold().yellow()));
        for category in &report.categories {
            let coverage = if category.has_full_coverage() {
                "full language support".green()
            } else {
                "partial".yellow()
            };
            out.push(format!(
                "  {:<12} display names: {:>2}  phrase sets: {:>2}  {}",
                category.id,
                category.display_languages(),
                category.phrase_languages,
                coverage
            ));
        }
    }

    fn consumer_lines(&self, report: &ValidationReport, out: &mut Vec<String>) {
        out.push(format!("{}", "APP VIEW".bold().yellow()));
        for category in &report.categories {
            out.extend(self.consumer_category(category));
        }
    }

    fn consumer_category(&self, category: &CategorySummary) -> Vec<String> {
        let mut lines = vec![
            format!(
                "  Category: {}",
                category.english_name.as_deref().unwrap_or(&category.id).bold()
            ),
            format!("    Languages: {}", category.display_languages()),
            format!("    English phrases: {}", category.english_phrases),
        ];
        if let Some(sample) = &category.sample {
            lines.push(format!("    Sample: \"{}\"", sample));
        }
        if let Some(alt) = &category.alternate {
            lines.push(format!("    {}: \"{}\"", alt.display_name, alt.phrase));
        }
        lines
    }

    fn coverage_lines(&self, report: &ValidationReport, out: &mut Vec<String>) {
        out.push(format!(
            "{} (minimum {} of {})",
            "LANGUAGE COVERAGE".bold().yellow(),
            report.min_languages,
            LANGUAGES.len()
        ));
        for category in &report.categories {
            let count = category.display_languages().min(category.phrase_languages);
            let count = if count >= report.min_languages {
                count.to_string().green()
            } else {
                count.to_string().red().bold()
            };
            out.push(format!("  {:<12} {}", category.id, count));
        }
    }

    fn summary_lines(&self, report: &ValidationReport, out: &mut Vec<String>) {
        out.push(format!("{}", "SUMMARY".bold().yellow()));
        out.push(format!("  Categories: {}", report.categories.len()));
        out.push(format!("  Languages: {}", report.language_count()));
        out.push(format!("  Category ids: {}", report.category_ids().join(", ")));

        let languages = report.languages();
        let shown: Vec<&str> = languages
            .iter()
            .take(SHOWN_LANGUAGES)
            .map(String::as_str)
            .collect();
        let more = if languages.len() > SHOWN_LANGUAGES { "..." } else { "" };
        out.push(format!("  Language codes: {}{}", shown.join(", "), more));
        out.push(format!("  File size: {} bytes", report.file_size));
        out.push(format!("  SHA-256: {}", report.sha256.dimmed()));
    }

    pub fn print_generated(&self, summary: &GenerateSummary) {
        println!(
            "{} {} with {} categories and {} languages",
            "Generated".green().bold(),
            summary.path.display(),
            summary.categories,
            summary.languages
        );
        println!("  {} bytes, sha256 {}", summary.bytes, summary.sha256.dimmed());
    }

    pub fn print_languages(&self) {
        println!("{}", "CATALOG LANGUAGES".bold().yellow());
        for (code, _) in LANGUAGES {
            println!(
                "  {}  {:<12} {}",
                code.bold(),
                language_name(code).unwrap_or("?"),
                native_name(code).unwrap_or("").dimmed()
            );
        }
        println!("  {} languages", LANGUAGES.len());
    }

    pub fn save<P: AsRef<Path>>(&self, report: &ValidationReport, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        fs::write(path.as_ref(), json)?;
        println!("Report saved to: {}", path.as_ref().display());
        Ok(())
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATEGORIES;
    use crate::document::{build_document, encode_document};
    use crate::validate::{validate_bytes, ValidationConfig};

    fn report_for(role: Role) -> ValidationReport {
        colored::control::set_override(false);
        let bytes = encode_document(&build_document(CATEGORIES)).unwrap();
        validate_bytes(Path::new("mem.plist"), &bytes, &ValidationConfig::for_role(role)).unwrap()
    }

    #[test]
    fn structure_report_lists_coverage() {
        let text = ReportFormatter::new().render(&report_for(Role::Structure));
        assert!(text.contains("[OK] greetings: structure valid"));
        assert!(text.contains("full language support"));
        assert!(text.contains("Categories: 5"));
        assert!(text.contains("Languages: 28"));
        assert!(text.contains("Language codes: en, es, fr, de, pt..."));
        assert!(text.contains("PASSED"));
    }

    #[test]
    fn consumer_report_shows_samples() {
        let text = ReportFormatter::new().render(&report_for(Role::Consumer));
        assert!(text.contains("Category: Greetings"));
        assert!(text.contains("Sample: \"Hello\""));
        assert!(text.contains("Saludos: \"Hola\""));
    }

    #[test]
    fn coverage_report_shows_minimum() {
        let text = ReportFormatter::new().render(&report_for(Role::Coverage));
        assert!(text.contains("(minimum 28 of 28)"));
        assert!(text.contains("Category ids: greetings, needs, comfort, feelings, responses"));
    }
}
