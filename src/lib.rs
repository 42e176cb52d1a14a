//! Lumen - typed site configuration for a static blog generator.
//!
//! The generator reads one immutable [`SiteConfig`] at build start: either
//! the built-in record from [`site_config`] or a `site.toml` loaded with
//! [`SiteConfig::load`].
//!
//! ```ignore
//! let config = lumen_config::site_config();
//! for item in &config.menu {
//!     println!("{} -> {}", item.label, config.resolve_path(&item.path));
//! }
//! ```

pub mod config;
pub mod logger;

pub use config::{
    Author, ConfigDiagnostics, ConfigError, ConfigFormat, Contacts, MenuItem, Platform,
    SiteConfig, site_config,
};
