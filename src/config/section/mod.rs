//! Configuration section definitions.
//!
//! Each module corresponds to a section in `faro.toml`:
//!
//! | Module         | TOML Section       | Purpose                              |
//! |----------------|--------------------|--------------------------------------|
//! | `build`        | `[build]`          | Trailing slash, compression, CSS     |
//! | `experimental` | `[experimental]`   | Opt-in experimental flags            |
//! | `integrations` | `[[integrations]]` | Registry-resolved integrations       |
//! | `locales`      | `[locales]`        | Locale map and labels                |
//! | `sidebar`      | `[[sidebar]]`      | Navigation tree                      |
//! | `site`         | `[site]`           | Title, description, social links     |

mod build;
mod experimental;
pub(crate) mod integrations;
mod locales;
pub(crate) mod sidebar;
mod site;

// Re-export section configs
pub use build::{BuildSectionConfig, TrailingSlash};
pub use experimental::ExperimentalConfig;
pub use integrations::{
    Integration, IntegrationConfig, MarkdocOptions, MdxOptions, PagefindOptions, REGISTRY,
    SitemapOptions,
};
pub use locales::{LocaleConfig, LocalesConfig, is_language_tag};
pub use sidebar::{
    AutogenerateSource, SidebarAutogenerate, SidebarEntry, SidebarGroup, SidebarLink,
};
pub use site::SiteSectionConfig;
