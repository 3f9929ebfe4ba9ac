//! `[[integrations]]` configuration.
//!
//! Integrations are declared as explicit `{ name, options }` pairs and
//! resolved against a static registry. Each registered name has a typed
//! option struct; option bags are deserialized strictly, so unknown option
//! keys are rejected.
//!
//! # Example
//!
//! ```toml
//! [[integrations]]
//! name = "markdoc"
//!
//! [integrations.options]
//! allow_html = true
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, DiagnosticKind, FieldPath};

/// Names accepted in `[[integrations]]`, in registry order.
pub const REGISTRY: &[&str] = &["markdoc", "mdx", "sitemap", "pagefind"];

// ============================================================================
// Declaration
// ============================================================================

/// One `[[integrations]]` entry as declared in the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationConfig {
    /// Registry name of the integration.
    pub name: String,

    /// Integration-specific options, validated against the registry entry.
    pub options: toml::Table,
}

// ============================================================================
// Resolved integrations
// ============================================================================

/// A declaration resolved against the registry, with typed options.
#[derive(Debug, Clone, PartialEq)]
pub enum Integration {
    Markdoc(MarkdocOptions),
    Mdx(MdxOptions),
    Sitemap(SitemapOptions),
    Pagefind(PagefindOptions),
}

impl Integration {
    /// Resolve a declaration against the registry.
    pub fn resolve(config: &IntegrationConfig) -> Result<Self, ResolveError> {
        let options = toml::Value::Table(config.options.clone());
        match config.name.as_str() {
            "markdoc" => options
                .try_into()
                .map(Self::Markdoc)
                .map_err(ResolveError::Options),
            "mdx" => options.try_into().map(Self::Mdx).map_err(ResolveError::Options),
            "sitemap" => options
                .try_into()
                .map(Self::Sitemap)
                .map_err(ResolveError::Options),
            "pagefind" => options
                .try_into()
                .map(Self::Pagefind)
                .map_err(ResolveError::Options),
            _ => Err(ResolveError::Unknown),
        }
    }

    /// Registry name of the resolved integration.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Markdoc(_) => "markdoc",
            Self::Mdx(_) => "mdx",
            Self::Sitemap(_) => "sitemap",
            Self::Pagefind(_) => "pagefind",
        }
    }
}

/// Why a declaration failed to resolve.
#[derive(Debug)]
pub enum ResolveError {
    /// Name is not in the registry.
    Unknown,
    /// Option bag does not match the registered option struct.
    Options(toml::de::Error),
}

// ============================================================================
// Option structs
// ============================================================================

/// Options for the Markdoc content format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkdocOptions {
    /// Allow raw HTML in Markdoc documents.
    pub allow_html: bool,

    /// Treat indentation as insignificant when parsing tags.
    pub ignore_indentation: bool,
}

/// Options for the MDX content format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MdxOptions {
    /// Optimize MDX output at build time.
    pub optimize: bool,

    /// GitHub-flavored Markdown extensions.
    pub gfm: bool,
}

impl Default for MdxOptions {
    fn default() -> Self {
        Self {
            optimize: false,
            gfm: true,
        }
    }
}

/// Options for sitemap generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SitemapOptions {
    /// Maximum entries per sitemap file before splitting.
    pub entry_limit: usize,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        Self { entry_limit: 45_000 }
    }
}

/// Options for the pagefind search index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagefindOptions {
    /// CSS selector for the indexed page region.
    pub root_selector: String,

    /// CSS selectors excluded from the index.
    pub exclude_selectors: Vec<String>,
}

impl Default for PagefindOptions {
    fn default() -> Self {
        Self {
            root_selector: "main".into(),
            exclude_selectors: Vec::new(),
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate the integration list against the registry.
pub(crate) fn validate(configs: &[IntegrationConfig], diag: &mut ConfigDiagnostics) {
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    for (idx, config) in configs.iter().enumerate() {
        let name_field = FieldPath::leaked(format!("integrations[{idx}].name"));

        if config.name.is_empty() {
            diag.error(
                DiagnosticKind::MissingField,
                name_field,
                "integration entries need a name",
            );
            continue;
        }

        if !seen.insert(config.name.as_str()) {
            diag.error(
                DiagnosticKind::DuplicateIntegration,
                name_field,
                format!("integration '{}' is listed more than once", config.name),
            );
            continue;
        }

        match Integration::resolve(config) {
            Ok(_) => {}
            Err(ResolveError::Unknown) => {
                diag.error_with_hint(
                    DiagnosticKind::UnknownIntegration,
                    name_field,
                    format!("unknown integration '{}'", config.name),
                    format!("known integrations: {}", REGISTRY.join(", ")),
                );
            }
            Err(ResolveError::Options(err)) => {
                diag.error(
                    DiagnosticKind::InvalidOptions,
                    FieldPath::leaked(format!("integrations[{idx}].options")),
                    format!("invalid options for '{}': {}", config.name, err.message()),
                );
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
