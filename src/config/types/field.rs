//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Static paths come from `#[derive(Config)]`; index-addressed paths
/// (sidebar entries, locale keys, integration slots) are built at
/// diagnostic time with [`FieldPath::leaked`].
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "site")]
/// pub struct SiteSectionConfig {
///     pub title: String,
/// }
///
/// // Generated:
/// impl SiteSectionConfig {
///     pub const FIELDS: SiteSectionConfigFields = ...;
/// }
///
/// // Usage:
/// diag.error(DiagnosticKind::MissingField, SiteSectionConfig::FIELDS.title, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    /// Build a path from a runtime string, e.g. `sidebar[2].items[0].link`.
    ///
    /// Leaks the string. Diagnostic paths are few and live until exit.
    pub fn leaked(path: String) -> Self {
        Self(Box::leak(path.into_boxed_str()))
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaked_path() {
        let field = FieldPath::leaked(format!("sidebar[{}].label", 3));
        assert_eq!(field.as_str(), "sidebar[3].label");
    }
}
