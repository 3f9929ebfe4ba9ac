//! Global config handle.
//!
//! Uses `arc-swap` for lock-free reads. The config is stored once at
//! startup, after validation, and is read-only for the remainder of the
//! process; there is no reload path.

use crate::config::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Get the current config.
///
/// Returns the default config until [`init_config`] has run.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Install the loaded config as the process-wide read-only instance.
#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_then_read() {
        let mut config = SiteConfig::default();
        config.site.title = "Handle Test".into();

        let installed = init_config(config);
        assert_eq!(installed.site.title, "Handle Test");
        assert_eq!(cfg().site.title, "Handle Test");
    }
}
