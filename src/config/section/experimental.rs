//! `[experimental]` section configuration.
//!
//! Opt-in features that may change or be removed between releases.
//! Enabling any of them produces a grouped hint after validation unless
//! `build.allow_experimental` is set.

use macros::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "experimental")]
pub struct ExperimentalConfig {
    /// Check an origin token on form-handling routes.
    #[config(status = experimental)]
    pub csrf_protection: bool,

    /// Cache content-collection scans between builds.
    #[config(status = experimental)]
    pub content_collection_cache: bool,

    /// Emit page scripts directly instead of routing them through the bundler.
    #[config(status = experimental)]
    pub direct_render_script: bool,
}
