// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-record shape and invariant checks

use super::{AlternateSample, CategorySummary, Finding, ValidationConfig};
use crate::catalog::{DEFAULT_LANGUAGE, LANGUAGES};
use crate::document::{KEY_DISPLAY_NAMES, KEY_ID, KEY_PHRASES};
use crate::i18n::is_valid_iso639_1;
use plist::{Dictionary, Value};
use std::collections::BTreeSet;

/// The only keys a record may carry.
const RECORD_KEYS: &[&str] = &[KEY_ID, KEY_DISPLAY_NAMES, KEY_PHRASES];

/// Languages tried, in order, for the consumer report's second sample.
const SAMPLE_LANGUAGES: &[&str] = &["es", "fr", "de", "ja", "zh"];

pub(super) struct RecordOutcome {
    /// Usable id, if the record has one.
    pub id: Option<String>,
    pub summary: Option<CategorySummary>,
}

pub(super) fn check_record(
    index: usize,
    value: &Value,
    config: &ValidationConfig,
    findings: &mut Vec<Finding>,
) -> RecordOutcome {
    let fallback = format!("record #{}", index + 1);
    let errors_before = error_count(findings);

    let Some(record) = value.as_dictionary() else {
        findings.push(Finding::error(Some(fallback.as_str()), None, "record must be a dictionary"));
        return RecordOutcome {
            id: None,
            summary: None,
        };
    };

    let id = check_id(record, &fallback, findings);
    let label = id.clone().unwrap_or(fallback);

    for key in record.keys() {
        if !RECORD_KEYS.contains(&key.as_str()) {
            findings.push(Finding::error(Some(label.as_str()), Some(key.as_str()), "unexpected key"));
        }
    }

    let names = check_display_names(record, &label, findings);
    let phrases = check_phrases(record, &label, findings);

    if let (Some(names), Some(phrases)) = (&names, &phrases) {
        check_language_sets(names, phrases, &label, config, findings);
    }

    if error_count(findings) == errors_before {
        findings.push(Finding::ok(&label, "structure valid"));
    }

    RecordOutcome {
        id,
        summary: Some(summarize(&label, names.as_deref(), phrases.as_deref())),
    }
}

fn error_count(findings: &[Finding]) -> usize {
    findings.iter().filter(|f| f.is_error()).count()
}

fn check_id(record: &Dictionary, label: &str, findings: &mut Vec<Finding>) -> Option<String> {
    match record.get(KEY_ID) {
        None => {
            findings.push(Finding::error(Some(label), Some(KEY_ID), "missing 'id' key"));
            None
        }
        Some(value) => match value.as_string() {
            None => {
                findings.push(Finding::error(Some(label), Some(KEY_ID), "must be a string"));
                None
            }
            Some(id) if id.trim().is_empty() => {
                findings.push(Finding::error(Some(label), Some(KEY_ID), "must not be empty"));
                None
            }
            Some(id) => Some(id.to_string()),
        },
    }
}

fn required_dict<'a>(
    record: &'a Dictionary,
    key: &str,
    label: &str,
    findings: &mut Vec<Finding>,
) -> Option<&'a Dictionary> {
    match record.get(key) {
        None => {
            findings.push(Finding::error(
                Some(label),
                Some(key),
                format!("missing '{}' key", key),
            ));
            None
        }
        Some(value) => {
            let dict = value.as_dictionary();
            if dict.is_none() {
                findings.push(Finding::error(Some(label), Some(key), "must be a dictionary"));
            }
            dict
        }
    }
}

/// Display names by language; `None` values are present but not strings.
type NameEntries = Vec<(String, Option<String>)>;
type PhraseEntries = Vec<(String, Vec<String>)>;

fn check_display_names(
    record: &Dictionary,
    label: &str,
    findings: &mut Vec<Finding>,
) -> Option<NameEntries> {
    let dict = required_dict(record, KEY_DISPLAY_NAMES, label, findings)?;
    let mut entries = Vec::with_capacity(dict.len());
    for (code, value) in dict.iter() {
        let name = value.as_string().map(str::to_string);
        if name.is_none() {
            findings.push(Finding::error(
                Some(label),
                Some(KEY_DISPLAY_NAMES),
                format!("'{}' must be a string", code),
            ));
        }
        entries.push((code.clone(), name));
    }
    Some(entries)
}

fn check_phrases(
    record: &Dictionary,
    label: &str,
    findings: &mut Vec<Finding>,
) -> Option<PhraseEntries> {
    let dict = required_dict(record, KEY_PHRASES, label, findings)?;
    let mut entries = Vec::with_capacity(dict.len());
    for (code, value) in dict.iter() {
        let Some(list) = value.as_array() else {
            findings.push(Finding::error(
                Some(label),
                Some(KEY_PHRASES),
                format!("'{}' must be an array", code),
            ));
            entries.push((code.clone(), Vec::new()));
            continue;
        };
        if list.is_empty() {
            findings.push(Finding::error(
                Some(label),
                Some(KEY_PHRASES),
                format!("'{}' has no phrases", code),
            ));
        }
        let mut phrases = Vec::with_capacity(list.len());
        for (i, item) in list.iter().enumerate() {
            match item.as_string() {
                None => findings.push(Finding::error(
                    Some(label),
                    Some(KEY_PHRASES),
                    format!("'{}'[{}] must be a string", code, i),
                )),
                Some(phrase) if phrase.trim().is_empty() => findings.push(Finding::error(
                    Some(label),
                    Some(KEY_PHRASES),
                    format!("'{}'[{}] is empty", code, i),
                )),
                Some(phrase) => phrases.push(phrase.to_string()),
            }
        }
        entries.push((code.clone(), phrases));
    }
    Some(entries)
}

fn check_language_sets(
    names: &NameEntries,
    phrases: &PhraseEntries,
    label: &str,
    config: &ValidationConfig,
    findings: &mut Vec<Finding>,
) {
    let name_codes: BTreeSet<&str> = names.iter().map(|(c, _)| c.as_str()).collect();
    let phrase_codes: BTreeSet<&str> = phrases.iter().map(|(c, _)| c.as_str()).collect();

    if name_codes != phrase_codes {
        findings.push(Finding::error(
            Some(label),
            None,
            format!(
                "language sets differ ({} only: {}; {} only: {})",
                KEY_DISPLAY_NAMES,
                join_or_none(name_codes.difference(&phrase_codes)),
                KEY_PHRASES,
                join_or_none(phrase_codes.difference(&name_codes)),
            ),
        ));
    }

    for (key, codes) in [(KEY_DISPLAY_NAMES, &name_codes), (KEY_PHRASES, &phrase_codes)] {
        if !codes.contains(DEFAULT_LANGUAGE) {
            findings.push(Finding::error(
                Some(label),
                Some(key),
                format!("missing English ('{}')", DEFAULT_LANGUAGE),
            ));
        }
        if codes.len() < config.min_languages {
            findings.push(Finding::error(
                Some(label),
                Some(key),
                format!(
                    "{} languages, at least {} required",
                    codes.len(),
                    config.min_languages
                ),
            ));
        }
    }

    let covered = name_codes.len().min(phrase_codes.len());
    if covered >= config.min_languages && covered < LANGUAGES.len() {
        findings.push(Finding::warning(
            label,
            None,
            format!("partial language support: {} of {}", covered, LANGUAGES.len()),
        ));
    }

    for code in name_codes.union(&phrase_codes) {
        if !is_valid_iso639_1(code) {
            findings.push(Finding::warning(
                label,
                None,
                format!("'{}' is not an ISO 639-1 code", code),
            ));
        }
    }
}

fn join_or_none<'a, 'b: 'a>(codes: impl Iterator<Item = &'a &'b str>) -> String {
    let joined: Vec<&str> = codes.copied().collect();
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined.join(", ")
    }
}

fn summarize(
    label: &str,
    names: Option<&[(String, Option<String>)]>,
    phrases: Option<&[(String, Vec<String>)]>,
) -> CategorySummary {
    let names = names.unwrap_or(&[]);
    let phrases = phrases.unwrap_or(&[]);

    let name_for = |code: &str| {
        names
            .iter()
            .find(|(c, _)| c == code)
            .and_then(|(_, name)| name.clone())
    };
    let phrases_for = |code: &str| {
        phrases
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, list)| list.as_slice())
            .unwrap_or(&[])
    };

    let english = phrases_for(DEFAULT_LANGUAGE);
    let alternate = SAMPLE_LANGUAGES.iter().copied().find_map(|code| {
        let display_name = name_for(code)?;
        let phrase = phrases_for(code).first()?.clone();
        Some(AlternateSample {
            code: code.to_string(),
            display_name,
            phrase,
        })
    });

    CategorySummary {
        id: label.to_string(),
        languages: names.iter().map(|(c, _)| c.clone()).collect(),
        phrase_languages: phrases.len(),
        english_name: name_for(DEFAULT_LANGUAGE),
        english_phrases: english.len(),
        sample: english.first().cloned(),
        alternate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{Level, Role};

    fn string(s: &str) -> Value {
        Value::String(s.to_string())
    }

    fn record(id: Value, names: &[(&str, Value)], phrases: &[(&str, Value)]) -> Value {
        let mut display_names = Dictionary::new();
        for (code, value) in names {
            display_names.insert(code.to_string(), value.clone());
        }
        let mut phrase_map = Dictionary::new();
        for (code, value) in phrases {
            phrase_map.insert(code.to_string(), value.clone());
        }
        let mut dict = Dictionary::new();
        dict.insert(KEY_ID.to_string(), id);
        dict.insert(KEY_DISPLAY_NAMES.to_string(), Value::Dictionary(display_names));
        dict.insert(KEY_PHRASES.to_string(), Value::Dictionary(phrase_map));
        Value::Dictionary(dict)
    }

    fn run(value: &Value, config: &ValidationConfig) -> (RecordOutcome, Vec<Finding>) {
        let mut findings = Vec::new();
        let outcome = check_record(0, value, config, &mut findings);
        (outcome, findings)
    }

    fn messages(findings: &[Finding], level: Level) -> Vec<String> {
        findings
            .iter()
            .filter(|f| f.level == level)
            .map(ToString::to_string)
            .collect()
    }

    fn lenient() -> ValidationConfig {
        ValidationConfig::for_role(Role::Structure)
    }

    #[test]
    fn minimal_english_record_passes_with_partial_warning() {
        let value = record(
            string("yes"),
            &[("en", string("Yes"))],
            &[("en", Value::Array(vec![string("Yes")]))],
        );
        let (outcome, findings) = run(&value, &lenient());
        assert_eq!(outcome.id.as_deref(), Some("yes"));
        assert!(messages(&findings, Level::Error).is_empty());
        assert_eq!(
            messages(&findings, Level::Warn),
            ["yes: partial language support: 1 of 28"]
        );
        let summary = outcome.summary.unwrap();
        assert_eq!(summary.english_name.as_deref(), Some("Yes"));
        assert_eq!(summary.sample.as_deref(), Some("Yes"));
        assert!(summary.alternate.is_none());
    }

    #[test]
    fn extra_record_key_is_an_error() {
        let mut value = record(
            string("yes"),
            &[("en", string("Yes"))],
            &[("en", Value::Array(vec![string("Yes")]))],
        );
        value
            .as_dictionary_mut()
            .unwrap()
            .insert("audioFile".to_string(), string("yes.mp3"));

        for role in [Role::Structure, Role::Consumer, Role::Coverage] {
            let config = ValidationConfig {
                min_languages: 1,
                ..ValidationConfig::for_role(role)
            };
            let (outcome, findings) = run(&value, &config);
            assert_eq!(
                messages(&findings, Level::Error),
                ["yes.audioFile: unexpected key"],
                "{:?}",
                role
            );
            assert!(outcome.summary.is_some());
            assert!(findings.iter().all(|f| f.detail != "structure valid"));
        }
    }

    #[test]
    fn non_dictionary_record() {
        let (outcome, findings) = run(&string("greetings"), &lenient());
        assert!(outcome.id.is_none());
        assert!(outcome.summary.is_none());
        assert_eq!(
            messages(&findings, Level::Error),
            ["record #1: record must be a dictionary"]
        );
    }

    #[test]
    fn bad_id_falls_back_to_index_label() {
        let value = record(
            Value::Integer(plist::Integer::from(7i64)),
            &[("en", string("Seven"))],
            &[("en", Value::Array(vec![string("Seven")]))],
        );
        let (outcome, findings) = run(&value, &lenient());
        assert!(outcome.id.is_none());
        assert_eq!(
            messages(&findings, Level::Error),
            ["record #1.id: must be a string"]
        );

        let empty = record(
            string("  "),
            &[("en", string("Blank"))],
            &[("en", Value::Array(vec![string("Blank")]))],
        );
        let (_, findings) = run(&empty, &lenient());
        assert_eq!(
            messages(&findings, Level::Error),
            ["record #1.id: must not be empty"]
        );
    }

    #[test]
    fn phrase_typing_errors() {
        let value = record(
            string("mixed"),
            &[("en", string("Mixed")), ("fr", string("Mixte")), ("de", Value::Boolean(true))],
            &[
                ("en", Value::Array(vec![string("Hi"), Value::Boolean(false), string(" ")])),
                ("fr", Value::Array(Vec::new())),
                ("de", string("Hallo")),
            ],
        );
        let (_, findings) = run(&value, &lenient());
        assert_eq!(
            messages(&findings, Level::Error),
            [
                "mixed.displayNames: 'de' must be a string",
                "mixed.phrases: 'en'[1] must be a string",
                "mixed.phrases: 'en'[2] is empty",
                "mixed.phrases: 'fr' has no phrases",
                "mixed.phrases: 'de' must be an array",
            ]
        );
    }

    #[test]
    fn missing_english_and_minimum() {
        let value = record(
            string("solo"),
            &[("fr", string("Seul"))],
            &[("fr", Value::Array(vec![string("Bonjour")]))],
        );
        let config = ValidationConfig::for_role(Role::Coverage);
        let (_, findings) = run(&value, &config);
        assert_eq!(
            messages(&findings, Level::Error),
            [
                "solo.displayNames: missing English ('en')",
                "solo.displayNames: 1 languages, at least 28 required",
                "solo.phrases: missing English ('en')",
                "solo.phrases: 1 languages, at least 28 required",
            ]
        );
    }

    #[test]
    fn unknown_code_is_a_warning() {
        let value = record(
            string("odd"),
            &[("en", string("Odd")), ("xx", string("Xx"))],
            &[
                ("en", Value::Array(vec![string("Odd")])),
                ("xx", Value::Array(vec![string("Xx")])),
            ],
        );
        let (_, findings) = run(&value, &lenient());
        assert!(messages(&findings, Level::Error).is_empty());
        assert!(messages(&findings, Level::Warn)
            .contains(&"odd: 'xx' is not an ISO 639-1 code".to_string()));
    }

    #[test]
    fn alternate_sample_prefers_listed_order() {
        let value = record(
            string("hello"),
            &[("en", string("Hello")), ("ja", string("挨拶")), ("de", string("Grüße"))],
            &[
                ("en", Value::Array(vec![string("Hello")])),
                ("ja", Value::Array(vec![string("こんにちは")])),
                ("de", Value::Array(vec![string("Hallo")])),
            ],
        );
        let (outcome, _) = run(&value, &lenient());
        let alternate = outcome.summary.unwrap().alternate.unwrap();
        assert_eq!(alternate.code, "de");
        assert_eq!(alternate.display_name, "Grüße");
        assert_eq!(alternate.phrase, "Hallo");
    }
}
