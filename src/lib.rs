// SPDX-License-Identifier: PMPL-1.0-or-later

//! soundboard-catalog: the multilingual `SoundboardCategories.plist` resource.
//!
//! The app's soundboard shows five phrase categories in 28 languages. This
//! crate holds those translations as static tables, writes them out as the
//! property list the app bundles, and checks any such document against the
//! shape the app's decoder expects.
//!
//! PIPELINE:
//! 1. **Catalog**: compile-time tables of display names and phrases.
//! 2. **Generate**: tables → plist document, overwritten in place.
//! 3. **Validate**: document → findings, per category and field, with a
//!    configurable minimum language count.

pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod generate;
pub mod i18n;
pub mod report;
pub mod storage;
pub mod validate;

pub use error::{CatalogError, Result};
