//! `[[sidebar]]` configuration.
//!
//! The navigation tree shown alongside documentation content: an ordered
//! forest of links, groups and autogenerate directives. Declaration order
//! is the navigation order and is preserved exactly.
//!
//! # Example
//!
//! ```toml
//! [[sidebar]]
//! label = "Guides"
//!
//! [[sidebar.items]]
//! label = "Example Guide"
//! link = "/guides/example/"
//!
//! [[sidebar]]
//! label = "Reference"
//! autogenerate = { directory = "reference" }
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::config::section::TrailingSlash;
use crate::config::{ConfigDiagnostics, DiagnosticKind, FieldPath};

// ============================================================================
// Entry types
// ============================================================================

/// One sidebar entry: a link, a group of nested entries, or an
/// autogenerate directive expanded by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SidebarEntry {
    Link(SidebarLink),
    Group(SidebarGroup),
    Autogenerate(SidebarAutogenerate),
}

/// A direct link to a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarLink {
    /// Display label.
    pub label: String,
    /// Site-relative route, e.g. `/guides/example/`.
    pub link: String,
}

/// A labeled group of nested entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Display label.
    pub label: String,
    /// Nested entries, in navigation order.
    pub items: Vec<SidebarEntry>,
    /// Render the group collapsed initially.
    #[serde(default)]
    pub collapsed: bool,
}

/// A group whose entries are generated from a content directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarAutogenerate {
    /// Display label.
    pub label: String,
    /// Source for the generated entries.
    pub autogenerate: AutogenerateSource,
}

/// Source directory for an autogenerated group. Directory resolution is
/// delegated to the renderer; only the declaration is checked here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutogenerateSource {
    /// Content directory the entries are generated from.
    pub directory: String,
    /// Render the generated group collapsed initially.
    pub collapsed: bool,
}

impl SidebarEntry {
    /// Display label of the entry.
    pub fn label(&self) -> &str {
        match self {
            Self::Link(link) => &link.label,
            Self::Group(group) => &group.label,
            Self::Autogenerate(auto) => &auto.label,
        }
    }
}

// ============================================================================
// Deserialization
// ============================================================================

/// Raw entry shape: classification into a variant happens after reading the
/// table, so the error can name the offending key combination.
#[derive(Deserialize)]
struct RawEntry {
    #[serde(default)]
    label: String,
    link: Option<String>,
    items: Option<Vec<SidebarEntry>>,
    autogenerate: Option<AutogenerateSource>,
    #[serde(default)]
    collapsed: bool,
}

impl<'de> Deserialize<'de> for SidebarEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawEntry::deserialize(deserializer)?;
        match (raw.link, raw.items, raw.autogenerate) {
            (Some(link), None, None) => Ok(Self::Link(SidebarLink {
                label: raw.label,
                link,
            })),
            (None, Some(items), None) => Ok(Self::Group(SidebarGroup {
                label: raw.label,
                items,
                collapsed: raw.collapsed,
            })),
            (None, None, Some(autogenerate)) => Ok(Self::Autogenerate(SidebarAutogenerate {
                label: raw.label,
                autogenerate,
            })),
            (None, None, None) => Err(de::Error::custom(
                "sidebar entry must set one of `link`, `items` or `autogenerate`",
            )),
            _ => Err(de::Error::custom(
                "sidebar entry may set only one of `link`, `items` and `autogenerate`",
            )),
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate the sidebar forest.
///
/// Checks labels, sibling label uniqueness, group non-emptiness, link path
/// shape against the trailing-slash policy, and autogenerate sources.
pub(crate) fn validate(
    entries: &[SidebarEntry],
    policy: TrailingSlash,
    diag: &mut ConfigDiagnostics,
) {
    validate_level(entries, "sidebar", policy, diag);
}

fn validate_level(
    entries: &[SidebarEntry],
    prefix: &str,
    policy: TrailingSlash,
    diag: &mut ConfigDiagnostics,
) {
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    for (idx, entry) in entries.iter().enumerate() {
        let base = format!("{prefix}[{idx}]");

        let label = entry.label();
        if label.trim().is_empty() {
            diag.error(
                DiagnosticKind::MissingField,
                FieldPath::leaked(format!("{base}.label")),
                "sidebar entries need a non-empty label",
            );
        } else if !seen.insert(label) {
            diag.error_with_hint(
                DiagnosticKind::DuplicateLabel,
                FieldPath::leaked(format!("{base}.label")),
                format!("label '{label}' is already used by a sibling entry"),
                "labels must be unique within their group to keep navigation unambiguous",
            );
        }

        match entry {
            SidebarEntry::Link(link) => {
                validate_link(&link.link, &base, policy, diag);
            }
            SidebarEntry::Group(group) => {
                if group.items.is_empty() {
                    diag.error_with_hint(
                        DiagnosticKind::EmptyGroup,
                        FieldPath::leaked(format!("{base}.items")),
                        format!("group '{}' has no entries", group.label),
                        "add at least one item or remove the group",
                    );
                } else {
                    validate_level(&group.items, &format!("{base}.items"), policy, diag);
                }
            }
            SidebarEntry::Autogenerate(auto) => {
                let dir = &auto.autogenerate.directory;
                let field = FieldPath::leaked(format!("{base}.autogenerate.directory"));
                if dir.trim().is_empty() {
                    diag.error(
                        DiagnosticKind::MissingField,
                        field,
                        "autogenerate needs a source directory",
                    );
                } else if dir.starts_with('/') {
                    diag.error_with_hint(
                        DiagnosticKind::InvalidPath,
                        field,
                        format!("'{dir}' must be relative to the content directory"),
                        "drop the leading '/'",
                    );
                }
            }
        }
    }
}

fn validate_link(link: &str, base: &str, policy: TrailingSlash, diag: &mut ConfigDiagnostics) {
    let field = FieldPath::leaked(format!("{base}.link"));

    if link.is_empty() {
        diag.error(DiagnosticKind::InvalidPath, field, "link must not be empty");
        return;
    }
    if !link.starts_with('/') {
        diag.error_with_hint(
            DiagnosticKind::InvalidPath,
            field,
            format!("'{link}' must start with '/'"),
            "sidebar links are site-relative routes",
        );
        return;
    }
    if link.chars().any(char::is_whitespace) {
        diag.error(
            DiagnosticKind::InvalidPath,
            field,
            format!("'{link}' contains whitespace"),
        );
        return;
    }

    match policy {
        TrailingSlash::Always if !link.ends_with('/') => {
            diag.error_with_hint(
                DiagnosticKind::InvalidPath,
                field,
                format!("'{link}' must end with '/' when trailing_slash is \"always\""),
                format!("write it as '{link}/'"),
            );
        }
        TrailingSlash::Never if link.len() > 1 && link.ends_with('/') => {
            diag.error_with_hint(
                DiagnosticKind::InvalidPath,
                field,
                format!("'{link}' must not end with '/' when trailing_slash is \"never\""),
                format!("write it as '{}'", link.trim_end_matches('/')),
            );
        }
        _ => {}
    }
}

// ============================================================================
// Tests
// ============================================================================
