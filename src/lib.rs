//! Configuration front-end for the faro documentation site generator.
//!
//! faro-config parses a `faro.toml` file describing a documentation site -
//! identity, navigation sidebar, locales, renderer flags and integrations -
//! validates it exhaustively, and hands the immutable result to the
//! rendering pipeline. All violations are collected into a single
//! aggregated error so a config file can be fixed in one pass.
//!
//! # Example
//!
//! ```
//! use faro_config::SiteConfig;
//!
//! let config = SiteConfig::from_str(
//!     r#"
//! [site]
//! title = "Documentación de Java"
//!
//! [[sidebar]]
//! label = "Guides"
//!
//! [[sidebar.items]]
//! label = "Example Guide"
//! link = "/guides/example/"
//! "#,
//! )
//! .unwrap();
//!
//! config.validate().unwrap();
//! assert_eq!(config.sidebar.len(), 1);
//! ```
//!
//! After validation the config is typically installed as the process-wide
//! read-only instance with [`init_config`] and read through [`cfg`].

pub mod config;
pub mod logger;

pub use config::{
    ConfigDiagnostics, ConfigError, DiagnosticKind, SiteConfig, cfg, init_config,
};
