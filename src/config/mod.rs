//! Site configuration management for `faro.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── experimental # [experimental]
//! │   ├── integrations # [[integrations]]
//! │   ├── locales    # [locales]
//! │   ├── sidebar    # [[sidebar]]
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   ├── handle     # Global config handle
//! │   └── status     # Field status validation
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section            | Purpose                                      |
//! |--------------------|----------------------------------------------|
//! | `schema_version`   | Config schema revision                       |
//! | `[site]`           | Site identity (title, description, social)   |
//! | `[[sidebar]]`      | Navigation tree, in declaration order        |
//! | `[locales]`        | Locale map (root + named locales)            |
//! | `[build]`          | Renderer flags and custom CSS                |
//! | `[experimental]`   | Opt-in experimental flags                    |
//! | `[[integrations]]` | Integrations resolved against the registry   |
//!
//! Loading is one-shot and synchronous: parse, validate everything at once,
//! and hand the immutable result to the renderer. All violations are
//! collected into a single aggregated error so a config file can be fixed
//! in one pass.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    AutogenerateSource, BuildSectionConfig, ExperimentalConfig, Integration, IntegrationConfig,
    LocaleConfig, LocalesConfig, MarkdocOptions, MdxOptions, PagefindOptions, REGISTRY,
    SidebarAutogenerate, SidebarEntry, SidebarGroup, SidebarLink, SiteSectionConfig,
    SitemapOptions, TrailingSlash, is_language_tag,
};

// Re-export from types/
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, DiagnosticKind, FieldPath, cfg, init_config,
};

use crate::{debug, log};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Supported `schema_version` for `faro.toml`.
pub const SCHEMA_VERSION: u32 = 1;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing faro.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Config schema revision, bumped on breaking layout changes.
    pub schema_version: u32,

    /// Site identity (title, description, social links)
    pub site: SiteSectionConfig,

    /// Navigation sidebar, in declaration order
    pub sidebar: Vec<SidebarEntry>,

    /// Locale map (root locale plus named locales)
    pub locales: LocalesConfig,

    /// Renderer flags and custom CSS assets
    pub build: BuildSectionConfig,

    /// Opt-in experimental flags
    pub experimental: ExperimentalConfig,

    /// Enabled integrations, resolved against the static registry
    pub integrations: Vec<IntegrationConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            schema_version: SCHEMA_VERSION,
            site: SiteSectionConfig::default(),
            sidebar: Vec::new(),
            locales: LocalesConfig::default(),
            build: BuildSectionConfig::default(),
            experimental: ExperimentalConfig::default(),
            integrations: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Load, finalize and validate a config file.
    ///
    /// Returns the immutable normalized structure, or a single aggregated
    /// error listing every violation found.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::from_path(path)?;
        config.finalize(path);
        config.validate()?;

        debug!(
            "config";
            "loaded {} ({} sidebar entries, {} integrations)",
            path.display(),
            config.sidebar.len(),
            config.integrations.len()
        );
        Ok(config)
    }

    /// Load the config file found by searching upward from cwd.
    pub fn discover(config_name: impl AsRef<Path>) -> Result<Self> {
        let name = config_name.as_ref();
        match find_config_file(name) {
            Some(path) => Self::load(path),
            None => bail!(ConfigError::Validation(format!(
                "config file '{}' not found in the current directory or any parent",
                name.display()
            ))),
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Record where the config came from.
    fn finalize(&mut self, path: &Path) {
        self.config_path = path.to_path_buf();
        self.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    ///
    /// Shorthand for `config.get_root().join(path)`.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole configuration.
    ///
    /// Collects all validation errors and returns them at once. No partial
    /// structure is exposed on failure: callers only ever see a config that
    /// passed every check, or the aggregated error.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::with_allow_experimental(self.build.allow_experimental);

        self.validate_schema_version(&mut diag);
        self.site.validate(&mut diag);
        self.locales.validate(&mut diag);
        section::sidebar::validate(&self.sidebar, self.build.trailing_slash, &mut diag);
        self.build.validate(&mut diag);
        section::integrations::validate(&self.integrations, &mut diag);

        // Field status (experimental flags)
        self.experimental.validate_field_status(&mut diag);

        // Print collected hints and warnings (grouped display)
        diag.print_hints_and_warnings();

        // Return all collected errors
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    fn validate_schema_version(&self, diag: &mut ConfigDiagnostics) {
        if self.schema_version != SCHEMA_VERSION {
            diag.error_with_hint(
                DiagnosticKind::UnsupportedSchema,
                FieldPath::new("schema_version"),
                format!(
                    "schema_version {} is not supported (expected {})",
                    self.schema_version, SCHEMA_VERSION
                ),
                "migrate the config file before loading it",
            );
        }
    }

    // ========================================================================
    // normalized views
    // ========================================================================

    /// Integrations resolved against the registry with typed options.
    ///
    /// Total after a successful [`validate`](Self::validate); declarations
    /// that do not resolve are skipped.
    pub fn resolved_integrations(&self) -> Vec<Integration> {
        self.integrations
            .iter()
            .filter_map(|config| Integration::resolve(config).ok())
            .collect()
    }

    /// Canonical JSON rendering with stable key order.
    ///
    /// Machine-local fields (`config_path`, `root`) are excluded, so two
    /// checkouts of the same config produce identical output - this is the
    /// structure to diff across branches and environments.
    pub fn canonical_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Content fingerprint of the normalized structure.
    pub fn fingerprint(&self) -> Result<String> {
        Ok(util::fingerprint(self.canonical_json()?.as_bytes()))
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal required `[site]` section.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIXTURE: &str = r#"[site]
title = "Documentación de Java"

[site.social]
github = "https://github.com/angelcgar/documentacion-java"

[[sidebar]]
label = "Guides"

[[sidebar.items]]
label = "Example Guide"
link = "/guides/example/"

[[sidebar]]
label = "Reference"
autogenerate = { directory = "reference" }

[locales.root]
label = "Español"
lang = "es"

[build]
trailing_slash = "always"
css = ["src/styles/css-reset-2024.css"]

[[integrations]]
name = "markdoc"
"#;

    /// Collect the diagnostic kinds an invalid config fails with.
    fn validate_kinds(config: &SiteConfig) -> Vec<DiagnosticKind> {
        let err = config.validate().unwrap_err();
        match err.downcast::<ConfigError>().unwrap() {
            ConfigError::Diagnostics(diag) => diag.errors().iter().map(|e| e.kind).collect(),
            other => panic!("expected aggregated diagnostics, got: {other}"),
        }
    }

    #[test]
    fn test_fixture_validates() {
        let config = SiteConfig::from_str(FIXTURE).unwrap();
        config.validate().unwrap();

        assert_eq!(config.site.title, "Documentación de Java");
        assert_eq!(config.sidebar.len(), 2);
        assert_eq!(config.locales.root.as_ref().unwrap().label, "Español");
        assert_eq!(config.build.trailing_slash, TrailingSlash::Always);

        let integrations = config.resolved_integrations();
        assert_eq!(integrations.len(), 1);
        assert_eq!(integrations[0].name(), "markdoc");
    }

    #[test]
    fn test_loading_is_idempotent() {
        let first = SiteConfig::from_str(FIXTURE).unwrap();
        let second = SiteConfig::from_str(FIXTURE).unwrap();

        assert_eq!(
            first.canonical_json().unwrap(),
            second.canonical_json().unwrap()
        );
        assert_eq!(first.fingerprint().unwrap(), second.fingerprint().unwrap());
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let base = SiteConfig::from_str(FIXTURE).unwrap();
        let changed = SiteConfig::from_str(&FIXTURE.replace("always", "never")).unwrap();
        assert_ne!(base.fingerprint().unwrap(), changed.fingerprint().unwrap());
    }

    #[test]
    fn test_load_from_file_sets_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faro.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.config_path, path);
        assert_eq!(config.get_root(), dir.path());
        assert_eq!(
            config.root_join("src/styles"),
            dir.path().join("src/styles")
        );
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::load(dir.path().join("faro.toml")).unwrap_err();
        assert!(matches!(
            err.downcast::<ConfigError>().unwrap(),
            ConfigError::Io(..)
        ));
    }

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result = SiteConfig::from_str("[site\ntitle = \"My Docs\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.schema_version, SCHEMA_VERSION);
        assert_eq!(config.site.title, "");
        assert!(config.build.compress_html);
        assert!(config.sidebar.is_empty());
        assert!(config.locales.is_empty());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_all_violations_reported_at_once() {
        // Empty title, bad locale tag, link without leading slash,
        // unknown integration: one validation pass reports all four.
        let config = SiteConfig::from_str(
            r#"[site]
title = ""

[[sidebar]]
label = "Guides"
link = "guides/"

[locales.root]
label = "Español"
lang = "not a tag"

[[integrations]]
name = "starlight"
"#,
        )
        .unwrap();

        let kinds = validate_kinds(&config);
        assert_eq!(kinds.len(), 4);
        assert!(kinds.contains(&DiagnosticKind::MissingField));
        assert!(kinds.contains(&DiagnosticKind::InvalidLocale));
        assert!(kinds.contains(&DiagnosticKind::InvalidPath));
        assert!(kinds.contains(&DiagnosticKind::UnknownIntegration));
    }

    #[test]
    fn test_trailing_slash_policy_applies_to_sidebar() {
        let strict = FIXTURE.replace("link = \"/guides/example/\"", "link = \"/guides/example\"");
        let config = SiteConfig::from_str(&strict).unwrap();

        let kinds = validate_kinds(&config);
        assert_eq!(kinds, [DiagnosticKind::InvalidPath]);
    }

    #[test]
    fn test_unsupported_schema_version() {
        // schema_version is a top-level key, so it goes before [site]
        let config =
            SiteConfig::from_str("schema_version = 99\n\n[site]\ntitle = \"Test\"").unwrap();
        let kinds = validate_kinds(&config);
        assert_eq!(kinds, [DiagnosticKind::UnsupportedSchema]);
    }

    #[test]
    fn test_minimal_config_validates() {
        let config = test_parse_config("");
        config.validate().unwrap();
    }

    #[test]
    fn test_discover_without_config_fails() {
        // A name that cannot exist anywhere up the tree
        let err = SiteConfig::discover("faro-test-nonexistent-0b1e.toml").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
