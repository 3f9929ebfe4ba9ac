//! `[site]` configuration.
//!
//! Site identity: title, description and social links. These values are
//! injected into the rendered header and page metadata.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Documentación de Java"
//!
//! [site.social]
//! github = "https://github.com/angelcgar/documentacion-java"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{ConfigDiagnostics, DiagnosticKind, FieldPath};

/// Site identity shown in the header and in page metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Site title shown in the header and browser tab.
    pub title: String,

    /// Short description used in page metadata.
    pub description: String,

    /// Social links shown in the header (platform → URL).
    /// Sorted by platform so canonical output stays diffable.
    #[config(skip)]
    pub social: BTreeMap<String, String>,
}

impl SiteSectionConfig {
    /// Validate site identity.
    ///
    /// # Checks
    /// - `title` must be non-empty
    /// - every social link must be an http/https/mailto URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                DiagnosticKind::MissingField,
                Self::FIELDS.title,
                "site title must not be empty",
                "set [site] title = \"My Documentation\"",
            );
        }

        for (platform, target) in &self.social {
            let field = FieldPath::leaked(format!("site.social.{platform}"));
            match url::Url::parse(target) {
                Ok(parsed) => match parsed.scheme() {
                    "http" | "https" => {
                        if parsed.host_str().is_none() {
                            diag.error_with_hint(
                                DiagnosticKind::InvalidUrl,
                                field,
                                "URL must have a valid host",
                                "use format like https://github.com/user/repo",
                            );
                        }
                    }
                    "mailto" => {}
                    scheme => {
                        diag.error_with_hint(
                            DiagnosticKind::InvalidUrl,
                            field,
                            format!("scheme '{scheme}' not supported, must be http, https or mailto"),
                            "use format like https://example.com",
                        );
                    }
                },
                Err(e) => {
                    diag.error_with_hint(
                        DiagnosticKind::InvalidUrl,
                        field,
                        format!("invalid URL: {e}"),
                        "use format like https://github.com/user/repo",
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> SiteSectionConfig {
        #[derive(Deserialize)]
        struct Doc {
            site: SiteSectionConfig,
        }
        toml::from_str::<Doc>(content).unwrap().site
    }

    #[test]
    fn test_social_links_accepted() {
        let site = parse(
            r#"[site]
title = "Documentación de Java"

[site.social]
github = "https://github.com/angelcgar/documentacion-java"
email = "mailto:docs@example.com""#,
        );

        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.is_empty());
        assert_eq!(site.social.len(), 2);
    }

    #[test]
    fn test_empty_title_is_missing_field() {
        let site = parse("[site]\ndescription = \"no title here\"");
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.has_kind(DiagnosticKind::MissingField));
    }

    #[test]
    fn test_social_scheme_rejected() {
        let site = parse(
            "[site]\ntitle = \"T\"\n[site.social]\ngithub = \"ftp://github.com/user\"",
        );
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.has_kind(DiagnosticKind::InvalidUrl));
        assert_eq!(diag.errors()[0].field.as_str(), "site.social.github");
    }

    #[test]
    fn test_social_not_a_url_rejected() {
        let site = parse("[site]\ntitle = \"T\"\n[site.social]\ndiscord = \"not a url\"");
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.has_kind(DiagnosticKind::InvalidUrl));
    }

    #[test]
    fn test_field_paths() {
        assert_eq!(SiteSectionConfig::FIELDS.title.as_str(), "site.title");
        assert_eq!(
            SiteSectionConfig::FIELDS.description.as_str(),
            "site.description"
        );
    }
}
