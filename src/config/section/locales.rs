//! `[locales]` configuration.
//!
//! Locale map for multilingual sites. The `root` locale is served at the
//! site root; named locales are keyed by their URL path segment and default
//! their language tag to the key.
//!
//! # Example
//!
//! ```toml
//! [locales.root]
//! label = "Español"
//! lang = "es"
//!
//! [locales.en]
//! label = "English"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{ConfigDiagnostics, DiagnosticKind, FieldPath};

/// Locale map: optional root locale plus named locales.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "locales")]
pub struct LocalesConfig {
    /// Locale served at the site root (no path prefix).
    pub root: Option<LocaleConfig>,

    /// Additional locales keyed by URL path segment.
    #[serde(flatten)]
    #[config(skip)]
    pub entries: BTreeMap<String, LocaleConfig>,
}

/// A single locale: display label plus language tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Display label for the language switcher (e.g. "Español").
    pub label: String,

    /// Language tag (e.g. "es", "zh-Hans"). Named locales fall back to
    /// their map key; the root locale must set this explicitly.
    pub lang: Option<String>,
}

impl LocalesConfig {
    /// Validate all locales (root and named).
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(root) = &self.root {
            root.validate("root", true, diag);
        }
        for (key, locale) in &self.entries {
            locale.validate(key, false, diag);
        }
    }

    /// True when no locale is declared (monolingual site).
    pub fn is_empty(&self) -> bool {
        self.root.is_none() && self.entries.is_empty()
    }
}

impl LocaleConfig {
    /// Resolved language tag: explicit `lang`, or the map key.
    pub fn language<'a>(&'a self, key: &'a str) -> &'a str {
        self.lang.as_deref().unwrap_or(key)
    }

    fn validate(&self, key: &str, is_root: bool, diag: &mut ConfigDiagnostics) {
        if self.label.trim().is_empty() {
            diag.error_with_hint(
                DiagnosticKind::MissingField,
                FieldPath::leaked(format!("locales.{key}.label")),
                "locales need a display label",
                "set label = \"English\"",
            );
        }

        match &self.lang {
            Some(lang) => {
                if !is_language_tag(lang) {
                    diag.error_with_hint(
                        DiagnosticKind::InvalidLocale,
                        FieldPath::leaked(format!("locales.{key}.lang")),
                        format!("'{lang}' is not a recognized language tag"),
                        "use a tag like \"es\", \"pt-BR\" or \"zh-Hans\"",
                    );
                }
            }
            None if is_root => {
                diag.error_with_hint(
                    DiagnosticKind::MissingField,
                    FieldPath::leaked(format!("locales.{key}.lang")),
                    "the root locale must set lang explicitly",
                    "set lang = \"en\"",
                );
            }
            None => {
                // Named locales fall back to their key as the tag
                if !is_language_tag(key) {
                    diag.error_with_hint(
                        DiagnosticKind::InvalidLocale,
                        FieldPath::leaked(format!("locales.{key}")),
                        format!("locale key '{key}' is not a recognized language tag"),
                        "rename the locale or set lang explicitly",
                    );
                }
            }
        }
    }
}

/// Check a language tag: primary subtag of 2-3 ASCII letters, optional
/// `-`-separated subtags of 1-8 alphanumerics ("es", "pt-BR", "zh-Hans").
pub fn is_language_tag(tag: &str) -> bool {
    let mut subtags = tag.split('-');
    let Some(primary) = subtags.next() else {
        return false;
    };
    if !(2..=3).contains(&primary.len()) || !primary.bytes().all(|b| b.is_ascii_alphabetic()) {
        return false;
    }
    subtags.all(|s| (1..=8).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphanumeric()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> LocalesConfig {
        #[derive(Deserialize)]
        struct Doc {
            locales: LocalesConfig,
        }
        toml::from_str::<Doc>(content).unwrap().locales
    }

    #[test]
    fn test_language_tags() {
        assert!(is_language_tag("es"));
        assert!(is_language_tag("en"));
        assert!(is_language_tag("ast"));
        assert!(is_language_tag("zh-Hans"));
        assert!(is_language_tag("pt-BR"));
        assert!(is_language_tag("de-CH-1901"));

        assert!(!is_language_tag(""));
        assert!(!is_language_tag("e"));
        assert!(!is_language_tag("english"));
        assert!(!is_language_tag("español"));
        assert!(!is_language_tag("es_ES"));
        assert!(!is_language_tag("es-"));
        assert!(!is_language_tag("-es"));
    }

    #[test]
    fn test_root_locale_round_trips() {
        let locales = parse("[locales.root]\nlabel = \"Español\"\nlang = \"es\"");

        let root = locales.root.as_ref().unwrap();
        assert_eq!(root.label, "Español");
        assert_eq!(root.lang.as_deref(), Some("es"));
        assert_eq!(root.language("root"), "es");

        let mut diag = ConfigDiagnostics::new();
        locales.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_named_locale_falls_back_to_key() {
        let locales = parse(
            "[locales.root]\nlabel = \"Español\"\nlang = \"es\"\n\n[locales.en]\nlabel = \"English\"",
        );

        let en = &locales.entries["en"];
        assert_eq!(en.language("en"), "en");

        let mut diag = ConfigDiagnostics::new();
        locales.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_root_without_lang_is_missing_field() {
        let locales = parse("[locales.root]\nlabel = \"Español\"");
        let mut diag = ConfigDiagnostics::new();
        locales.validate(&mut diag);
        assert!(diag.has_kind(DiagnosticKind::MissingField));
        assert_eq!(diag.errors()[0].field.as_str(), "locales.root.lang");
    }

    #[test]
    fn test_bad_tag_is_invalid_locale() {
        let locales = parse("[locales.root]\nlabel = \"Wrong\"\nlang = \"not a tag\"");
        let mut diag = ConfigDiagnostics::new();
        locales.validate(&mut diag);
        assert!(diag.has_kind(DiagnosticKind::InvalidLocale));
    }

    #[test]
    fn test_bad_key_without_lang_is_invalid_locale() {
        let locales = parse("[locales.translations]\nlabel = \"Other\"");
        let mut diag = ConfigDiagnostics::new();
        locales.validate(&mut diag);
        assert!(diag.has_kind(DiagnosticKind::InvalidLocale));
    }

    #[test]
    fn test_empty_locales_is_valid() {
        let locales = LocalesConfig::default();
        assert!(locales.is_empty());
        let mut diag = ConfigDiagnostics::new();
        locales.validate(&mut diag);
        assert!(diag.is_empty());
    }
}
