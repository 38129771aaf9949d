// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in soundboard catalog.
//!
//! The catalog is embedded at compile time as static data. [`CATEGORIES`]
//! holds one [`CategoryTable`] per category; the generator turns those into
//! the plist document and [`SoundboardCategory`] is the owned shape the app
//! decodes it back into.
//!
//! ## Adding a language
//!
//! 1. Add the `(code, name)` pair to [`LANGUAGES`]
//! 2. Add a display name to every table in `tables.rs`
//! 3. Add a phrase list to every table in `tables.rs`, same phrase order as `en`
//!
//! Skipping step 2 or 3 for any table produces a document the validator
//! rejects with a language-set mismatch.

mod tables;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use tables::{COMFORT, FEELINGS, GREETINGS, NEEDS, RESPONSES};

/// The 28 catalog languages as `(ISO 639-1 code, English name)`, in document order.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("pt", "Portuguese"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("nl", "Dutch"),
    ("ru", "Russian"),
    ("zh", "Chinese"),
    ("hi", "Hindi"),
    ("ar", "Arabic"),
    ("bn", "Bengali"),
    ("ko", "Korean"),
    ("tr", "Turkish"),
    ("pl", "Polish"),
    ("sv", "Swedish"),
    ("vi", "Vietnamese"),
    ("id", "Indonesian"),
    ("ur", "Urdu"),
    ("tl", "Filipino"),
    ("th", "Thai"),
    ("el", "Greek"),
    ("cs", "Czech"),
    ("hu", "Hungarian"),
    ("ro", "Romanian"),
    ("da", "Danish"),
    ("fi", "Finnish"),
];

/// Language every category must carry; the app falls back to it.
pub const DEFAULT_LANGUAGE: &str = "en";

/// All built-in categories, in document order.
pub const CATEGORIES: &[CategoryTable] = &[GREETINGS, NEEDS, COMFORT, FEELINGS, RESPONSES];

/// Ids of the built-in categories, in document order.
pub const CATEGORY_IDS: &[&str] = &["greetings", "needs", "comfort", "feelings", "responses"];

/// Static source table for one category.
///
/// Both slices are keyed by language code. Nothing checks that they cover
/// the same languages; that is the validator's job once the document exists.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTable {
    pub id: &'static str,
    pub display_names: &'static [(&'static str, &'static str)],
    pub phrases: &'static [(&'static str, &'static [&'static str])],
}

impl CategoryTable {
    pub fn display_name(&self, code: &str) -> Option<&'static str> {
        self.display_names
            .iter()
            .find(|(lang, _)| *lang == code)
            .map(|(_, name)| *name)
    }

    pub fn phrases_for(&self, code: &str) -> Option<&'static [&'static str]> {
        self.phrases
            .iter()
            .find(|(lang, _)| *lang == code)
            .map(|(_, phrases)| *phrases)
    }
}

/// One soundboard category as the app decodes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundboardCategory {
    pub id: String,
    #[serde(rename = "displayNames")]
    pub display_names: BTreeMap<String, String>,
    pub phrases: BTreeMap<String, Vec<String>>,
}

impl SoundboardCategory {
    /// Display name in `code`, falling back to the category id.
    pub fn display_name(&self, code: &str) -> &str {
        self.display_names
            .get(code)
            .map(String::as_str)
            .unwrap_or(&self.id)
    }

    pub fn phrases_for(&self, code: &str) -> &[String] {
        self.phrases.get(code).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl From<&CategoryTable> for SoundboardCategory {
    fn from(table: &CategoryTable) -> Self {
        Self {
            id: table.id.to_string(),
            display_names: table
                .display_names
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
            phrases: table
                .phrases
                .iter()
                .map(|(code, phrases)| {
                    (
                        code.to_string(),
                        phrases.iter().map(|p| p.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }
}
