//! Field status types for config validation.
//!
//! Used to check if users set fields with special status
//! (experimental, deprecated).

use super::FieldPath;
use crate::config::ConfigDiagnostics;

/// Field status for validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Experimental,
    Deprecated,
}

impl FieldStatus {
    /// Get status label for display.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Experimental => "experimental",
            Self::Deprecated => "deprecated",
        }
    }
}

/// Check field status and report diagnostics
///
/// Called by generated `validate_field_status` methods when a field
/// with special status differs from its default value
pub fn check_field_status(field_path: &str, status: FieldStatus, diag: &mut ConfigDiagnostics) {
    // Skip experimental hints if allowed
    if status == FieldStatus::Experimental && diag.allow_experimental {
        return;
    }

    let path = FieldPath::leaked(field_path.to_string());

    match status {
        FieldStatus::Deprecated => {
            diag.warn(
                path,
                "field is deprecated and will be removed in a future version",
            );
        }
        FieldStatus::Experimental => {
            diag.experimental_hint(path);
        }
    }
}

/// Check section-level status and report diagnostics
///
/// Called when a section (struct) has experimental/deprecated status
/// and any of its fields are set to non-default values
pub fn check_section_status(section: &str, status: FieldStatus, diag: &mut ConfigDiagnostics) {
    if status == FieldStatus::Experimental && diag.allow_experimental {
        return;
    }

    let path = FieldPath::leaked(format!("[{}]", section));

    match status {
        FieldStatus::Deprecated => {
            diag.warn(
                path,
                "this section is deprecated and will be removed in a future version",
            );
        }
        FieldStatus::Experimental => {
            diag.experimental_hint(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experimental_field_collects_hint() {
        let mut diag = ConfigDiagnostics::new();
        check_field_status("experimental.csrf_protection", FieldStatus::Experimental, &mut diag);
        assert_eq!(diag.hints().len(), 1);
        assert_eq!(diag.hints()[0].as_str(), "experimental.csrf_protection");
        assert!(diag.is_empty());
    }

    #[test]
    fn experimental_hint_suppressed_when_allowed() {
        let mut diag = ConfigDiagnostics::with_allow_experimental(true);
        check_field_status("experimental.csrf_protection", FieldStatus::Experimental, &mut diag);
        check_section_status("experimental", FieldStatus::Experimental, &mut diag);
        assert!(diag.hints().is_empty());
    }

    #[test]
    fn deprecated_field_collects_warning() {
        let mut diag = ConfigDiagnostics::new();
        check_field_status("build.compress", FieldStatus::Deprecated, &mut diag);
        assert_eq!(diag.warnings().len(), 1);
        // Deprecation is a warning, not an error
        assert!(diag.is_empty());
    }

    #[test]
    fn section_status_uses_bracketed_path() {
        let mut diag = ConfigDiagnostics::new();
        check_section_status("experimental", FieldStatus::Experimental, &mut diag);
        assert_eq!(diag.hints()[0].as_str(), "[experimental]");
    }
}
