//! `[build]` section configuration.
//!
//! Flags consumed by the renderer when emitting pages, plus the custom CSS
//! assets layered over the theme.
//!
//! # Example
//!
//! ```toml
//! [build]
//! trailing_slash = "always"   # Route style: always | never | ignore
//! compress_html = true        # Collapse insignificant whitespace in HTML
//! smartypants = true          # Typographic quotes, dashes and ellipses
//! css = ["src/styles/css-reset-2024.css"]
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, DiagnosticKind, FieldPath};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "build")]
pub struct BuildSectionConfig {
    /// Trailing-slash policy applied to routes and sidebar links.
    pub trailing_slash: TrailingSlash,

    /// Compress emitted HTML.
    pub compress_html: bool,

    /// Typographic punctuation in prose.
    pub smartypants: bool,

    /// Custom CSS files layered over the theme, in declaration order.
    /// Relative to the site root; resolved by the renderer, not here.
    #[config(skip)]
    pub css: Vec<PathBuf>,

    /// Accept experimental options without hints.
    pub allow_experimental: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            trailing_slash: TrailingSlash::default(),
            compress_html: true,
            smartypants: true,
            css: Vec::new(),
            allow_experimental: false,
        }
    }
}

impl BuildSectionConfig {
    /// Validate CSS asset paths: non-empty and relative to the site root.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (idx, path) in self.css.iter().enumerate() {
            let field = FieldPath::leaked(format!("build.css[{idx}]"));
            if path.as_os_str().is_empty() {
                diag.error(
                    DiagnosticKind::InvalidPath,
                    field,
                    "css path must not be empty",
                );
            } else if path.is_absolute() {
                diag.error_with_hint(
                    DiagnosticKind::InvalidPath,
                    field,
                    format!("'{}' must be relative to the site root", path.display()),
                    "use a path like \"src/styles/custom.css\"",
                );
            }
        }
    }
}

/// Trailing-slash policy for routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingSlash {
    /// Routes must end with `/`.
    Always,

    /// Routes must not end with `/` (the root route `/` excepted).
    Never,

    /// Either style is accepted.
    #[default]
    Ignore,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> BuildSectionConfig {
        #[derive(Deserialize)]
        struct Doc {
            #[serde(default)]
            build: BuildSectionConfig,
        }
        toml::from_str::<Doc>(content).unwrap().build
    }

    #[test]
    fn test_defaults() {
        let build = BuildSectionConfig::default();
        assert_eq!(build.trailing_slash, TrailingSlash::Ignore);
        assert!(build.compress_html);
        assert!(build.smartypants);
        assert!(build.css.is_empty());
        assert!(!build.allow_experimental);
    }

    #[test]
    fn test_trailing_slash_values() {
        assert_eq!(
            parse("[build]\ntrailing_slash = \"always\"").trailing_slash,
            TrailingSlash::Always
        );
        assert_eq!(
            parse("[build]\ntrailing_slash = \"never\"").trailing_slash,
            TrailingSlash::Never
        );
        assert_eq!(
            parse("[build]\ntrailing_slash = \"ignore\"").trailing_slash,
            TrailingSlash::Ignore
        );
    }

    #[test]
    fn test_unknown_trailing_slash_fails_to_parse() {
        #[derive(Deserialize)]
        struct Doc {
            #[serde(default)]
            #[allow(dead_code)]
            build: BuildSectionConfig,
        }
        assert!(toml::from_str::<Doc>("[build]\ntrailing_slash = \"sometimes\"").is_err());
    }

    #[test]
    fn test_relative_css_accepted() {
        let build = parse("[build]\ncss = [\"src/styles/css-reset-2024.css\"]");
        let mut diag = ConfigDiagnostics::new();
        build.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_absolute_css_rejected() {
        let build = parse("[build]\ncss = [\"/etc/styles.css\"]");
        let mut diag = ConfigDiagnostics::new();
        build.validate(&mut diag);
        assert!(diag.has_kind(DiagnosticKind::InvalidPath));
        assert_eq!(diag.errors()[0].field.as_str(), "build.css[0]");
    }

    #[test]
    fn test_empty_css_path_rejected() {
        let build = parse("[build]\ncss = [\"\"]");
        let mut diag = ConfigDiagnostics::new();
        build.validate(&mut diag);
        assert!(diag.has_kind(DiagnosticKind::InvalidPath));
    }
}
