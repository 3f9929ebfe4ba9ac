//! Proc macros for faro-config.
//!
//! # Config derive macro
//!
//! Generates typed field path accessors and field status validation for
//! config section structs.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! pub struct SiteSectionConfig {
//!     /// Site title shown in the header.
//!     pub title: String,
//!
//!     /// Social links (platform -> URL).
//!     #[config(skip)]
//!     pub social: BTreeMap<String, String>,
//! }
//!
//! // Generates:
//! // - SiteSectionConfig::FIELDS.title -> FieldPath("site.title")
//! // - SiteSectionConfig::validate_field_status(&self, diag)
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//! - `#[config(status = experimental)]` - status for the whole section
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS (dynamic or internal fields)
//! - `#[config(sub_config)]` - Recurse into a nested Config type
//! - `#[config(status = experimental)]` - Hint when set to a non-default value
//! - `#[config(status = deprecated)]` - Warn when set to a non-default value
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `SiteSectionConfig` → `site`
//! - `LocalesConfig` → `locales`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and validate_field_status().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
