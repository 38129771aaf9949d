// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language code helpers.
//!
//! The validator uses these to flag language keys that are not ISO 639-1
//! codes (a warning, since the app only matches keys literally), and the
//! `languages` command uses the names to list what the catalog covers.

mod iso639;

pub use iso639::{is_valid_iso639_1, language_name, native_name};
