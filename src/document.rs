// SPDX-License-Identifier: PMPL-1.0-or-later

//! Property-list codec for the soundboard document.
//!
//! The document root is an array with one dictionary per category, keyed
//! `id`, `displayNames`, `phrases` in that order. Dictionaries keep
//! insertion order, so the same tables always encode to the same bytes.

use crate::catalog::{CategoryTable, SoundboardCategory};
use crate::error::{CatalogError, Result};
use plist::{Dictionary, Value};
use std::io::Cursor;
use std::path::Path;

pub const KEY_ID: &str = "id";
pub const KEY_DISPLAY_NAMES: &str = "displayNames";
pub const KEY_PHRASES: &str = "phrases";

/// Build the document value for `tables`, one record per table.
pub fn build_document(tables: &[CategoryTable]) -> Value {
    Value::Array(tables.iter().map(build_record).collect())
}

fn build_record(table: &CategoryTable) -> Value {
    let mut display_names = Dictionary::new();
    for (code, name) in table.display_names {
        display_names.insert(code.to_string(), Value::String(name.to_string()));
    }

    let mut phrases = Dictionary::new();
    for (code, list) in table.phrases {
        let list = list.iter().map(|p| Value::String(p.to_string())).collect();
        phrases.insert(code.to_string(), Value::Array(list));
    }

    let mut record = Dictionary::new();
    record.insert(KEY_ID.to_string(), Value::String(table.id.to_string()));
    record.insert(KEY_DISPLAY_NAMES.to_string(), Value::Dictionary(display_names));
    record.insert(KEY_PHRASES.to_string(), Value::Dictionary(phrases));
    Value::Dictionary(record)
}

/// Serialize a document as an XML property list.
pub fn encode_document(document: &Value) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    document
        .to_writer_xml(&mut buf)
        .map_err(|source| CatalogError::Encode { source })?;
    Ok(buf)
}

/// Parse plist bytes (XML or binary) read from `path`.
pub fn parse_document(path: &Path, bytes: &[u8]) -> Result<Value> {
    Value::from_reader(Cursor::new(bytes)).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode into typed categories, the way the app's plist decoder does.
pub fn decode_categories(path: &Path, bytes: &[u8]) -> Result<Vec<SoundboardCategory>> {
    plist::from_reader(Cursor::new(bytes)).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
