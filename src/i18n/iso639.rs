// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language code validation and names.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// All 184 ISO 639-1 codes, sorted for binary search.
const ISO_639_1: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg",
    "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv",
    "cy", "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi",
    "fj", "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr",
    "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja",
    "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw",
    "ky", "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml",
    "mn", "mr", "ms", "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv",
    "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu", "rm", "rn", "ro",
    "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr",
    "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr",
    "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi",
    "yo", "za", "zh", "zu",
];

/// Whether `code` is an ISO 639-1 two-letter code.
///
/// Case-sensitive: codes in the document are lowercase.
///
/// # Examples
/// ```
/// assert!(soundboard_catalog::i18n::is_valid_iso639_1("tl"));
/// assert!(!soundboard_catalog::i18n::is_valid_iso639_1("xx"));
/// assert!(!soundboard_catalog::i18n::is_valid_iso639_1("EN"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    ISO_639_1.binary_search(&code).is_ok()
}

/// English name for a catalog language, plus a few close neighbours.
pub fn language_name(code: &str) -> Option<&'static str> {
    crate::catalog::LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .or(match code {
            "uk" => Some("Ukrainian"),
            "he" => Some("Hebrew"),
            "no" | "nb" => Some("Norwegian"),
            "ms" => Some("Malay"),
            "fa" => Some("Persian"),
            "sw" => Some("Swahili"),
            _ => None,
        })
}

/// Endonym of a catalog language, as shown in the app's language picker.
pub fn native_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "en" => "English",
        "es" => "Español",
        "fr" => "Français",
        "de" => "Deutsch",
        "pt" => "Português",
        "it" => "Italiano",
        "ja" => "日本語",
        "nl" => "Nederlands",
        "ru" => "Русский",
        "zh" => "中文",
        "hi" => "हिन्दी",
        "ar" => "العربية",
        "bn" => "বাংলা",
        "ko" => "한국어",
        "tr" => "Türkçe",
        "pl" => "Polski",
        "sv" => "Svenska",
        "vi" => "Tiếng Việt",
        "id" => "Bahasa Indonesia",
        "ur" => "اردو",
        "tl" => "Filipino",
        "th" => "ไทย",
        "el" => "Ελληνικά",
        "cs" => "Čeština",
        "hu" => "Magyar",
        "ro" => "Română",
        "da" => "Dansk",
        "fi" => "Suomi",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LANGUAGES;

    #[test]
    fn table_is_sorted_and_complete() {
        assert!(ISO_639_1.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ISO_639_1.len(), 184);
    }

    #[test]
    fn invalid_codes_rejected() {
        assert!(!is_valid_iso639_1("xx"));
        assert!(!is_valid_iso639_1(""));
        assert!(!is_valid_iso639_1("eng"));
        assert!(!is_valid_iso639_1("EN"));
    }

    #[test]
    fn every_catalog_language_is_known() {
        for (code, name) in LANGUAGES {
            assert!(is_valid_iso639_1(code), "{} should be valid", code);
            assert_eq!(language_name(code), Some(*name));
            assert!(native_name(code).is_some(), "{} has no native name", code);
        }
    }

    #[test]
    fn neighbours_and_unknowns() {
        assert_eq!(language_name("sw"), Some("Swahili"));
        assert_eq!(language_name("xx"), None);
        assert_eq!(native_name("sw"), None);
    }
}
