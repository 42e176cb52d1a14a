//! Site configuration record and its `site.toml` representation.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Nested tables
//! │   ├── author     # [author]
//! │   ├── contacts   # [author.contacts], Platform
//! │   └── menu       # [[menu]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── util           # URL and config file helpers
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Keys
//!
//! Field names are consumed verbatim by the site generator, so they keep
//! their camelCase spelling in every format:
//!
//! | Key                 | Purpose                                   |
//! |---------------------|-------------------------------------------|
//! | `url`               | Site root URL                             |
//! | `pathPrefix`        | Sub-path the site is mounted under        |
//! | `title`, `subtitle` | Site name and tagline                     |
//! | `copyright`         | Footer text                               |
//! | `disqusShortname`   | Comments integration (empty = off)        |
//! | `postsPerPage`      | Pagination size                           |
//! | `googleAnalyticsId` | Analytics tracking ID (empty = off)       |
//! | `useKatex`          | Math rendering                            |
//! | `[[menu]]`          | Navigation entries, in render order       |
//! | `[author]`          | Author widget and contacts                |

pub mod section;
pub mod types;
pub mod util;

pub use section::{Author, Contacts, MenuItem, Platform, UnknownPlatform};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::debug;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, sync::LazyLock};
use util::{extract_url_path, normalize_path_prefix};

/// Built-in configuration, materialized on first access.
static SITE_CONFIG: LazyLock<SiteConfig> = LazyLock::new(SiteConfig::lumen);

/// Get the site configuration.
///
/// The record is immutable and shared by every caller.
pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}

// ============================================================================
// file format
// ============================================================================

/// On-disk representation of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
}

impl ConfigFormat {
    /// `.json` files are JSON, everything else is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site root URL (e.g., "https://lumen.netlify.com").
    pub url: String,

    /// Sub-path the site is served under.
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,

    /// Site title.
    pub title: String,

    /// Tagline shown under the title.
    #[serde(default)]
    pub subtitle: String,

    /// Footer copyright notice.
    #[serde(default)]
    pub copyright: String,

    /// Disqus shortname, empty disables comments.
    #[serde(default)]
    pub disqus_shortname: String,

    /// Number of posts on each index page.
    #[serde(default = "default_posts_per_page")]
    pub posts_per_page: u32,

    /// Google Analytics tracking ID, empty disables analytics.
    #[serde(default)]
    pub google_analytics_id: String,

    /// Enable KaTeX math rendering.
    #[serde(default)]
    pub use_katex: bool,

    /// Navigation menu.
    #[serde(default)]
    pub menu: Vec<MenuItem>,

    pub author: Author,
}

fn default_path_prefix() -> String {
    "/".into()
}

const fn default_posts_per_page() -> u32 {
    4
}

/// Paths of the fields `validate` reports on.
pub struct SiteConfigFields {
    pub url: FieldPath,
    pub path_prefix: FieldPath,
    pub title: FieldPath,
    pub posts_per_page: FieldPath,
}

impl SiteConfig {
    pub const FIELDS: SiteConfigFields = SiteConfigFields {
        url: FieldPath::new("url"),
        path_prefix: FieldPath::new("pathPrefix"),
        title: FieldPath::new("title"),
        posts_per_page: FieldPath::new("postsPerPage"),
    };

    /// The built-in Lumen blog configuration.
    pub fn lumen() -> Self {
        let placeholder = String::from("#");
        Self {
            url: "https://lumen.netlify.com".into(),
            path_prefix: "/".into(),
            title: "Blog by Victor Mwenda".into(),
            subtitle: "Pellentesque odio nisi, euismod in, pharetra a, ultricies in, diam. Sed arcu."
                .into(),
            copyright: "© All rights reserved.".into(),
            disqus_shortname: String::new(),
            posts_per_page: 4,
            google_analytics_id: "UA-73379983-2".into(),
            use_katex: false,
            menu: vec![
                MenuItem::new("Articles", "/"),
                MenuItem::new("About me", "https://victorkiambi.github.io/"),
                MenuItem::new("Contact me", "/pages/contacts"),
            ],
            author: Author {
                name: "Victor Mwenda".into(),
                photo: "/photo.jpg".into(),
                bio: "Just another Software Developer. Falling in love with JavaScript sprinkle \
                      in Java and add a handful of Docker, Kubernetes and AWS. Perfect recipe."
                    .into(),
                contacts: Contacts {
                    facebook: placeholder.clone(),
                    telegram: placeholder.clone(),
                    twitter: placeholder.clone(),
                    github: placeholder.clone(),
                    linkedin: placeholder.clone(),
                    instagram: placeholder,
                    ..Contacts::default()
                },
            },
        }
    }

    // ========================================================================
    // parsing
    // ========================================================================

    /// Parse configuration from TOML string, rejecting unknown fields.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        Self::reject_unknown(config, ignored)
    }

    /// Parse configuration from JSON string, rejecting unknown fields.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_json_with_ignored(content)?;
        Self::reject_unknown(config, ignored)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(FieldPath::from_ignored(&path).as_str().to_string());
        })?;
        Ok((config, ignored))
    }

    /// Parse JSON content, collecting any unknown fields.
    pub fn parse_json_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let mut deserializer = serde_json::Deserializer::from_str(content);
        let config = serde_ignored::deserialize(&mut deserializer, |path: serde_ignored::Path| {
            ignored.push(FieldPath::from_ignored(&path).as_str().to_string());
        })?;
        deserializer.end()?;
        Ok((config, ignored))
    }

    fn reject_unknown(config: Self, ignored: Vec<String>) -> Result<Self, ConfigError> {
        if ignored.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::UnknownFields(ignored))
        }
    }

    /// Load and validate configuration from a file.
    ///
    /// The format follows the file extension (see [`ConfigFormat::from_path`]).
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let config = match ConfigFormat::from_path(path) {
            ConfigFormat::Toml => Self::from_str(&content),
            ConfigFormat::Json => Self::from_json(&content),
        }
        .with_context(|| format!("Failed to load config file '{}'", path.display()))?;

        config.validate()?;

        debug!(
            "load";
            "{}: {} menu entries, {} visible contacts",
            path.display(),
            config.menu.len(),
            config.author.contacts.visible().count()
        );
        Ok(config)
    }

    // ========================================================================
    // serialization
    // ========================================================================

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn serialize_as(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        match format {
            ConfigFormat::Toml => self.to_toml(),
            ConfigFormat::Json => self.to_json(),
        }
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// Disqus comments are rendered only with a non-empty shortname.
    pub fn comments_enabled(&self) -> bool {
        !self.disqus_shortname.is_empty()
    }

    /// The analytics snippet is rendered only with a non-empty tracking ID.
    pub fn analytics_enabled(&self) -> bool {
        !self.google_analytics_id.is_empty()
    }

    /// Join a site-relative path with `pathPrefix`.
    ///
    /// Absolute URLs are returned unchanged.
    ///
    /// ```ignore
    /// // pathPrefix = "/blog"
    /// config.resolve_path("/pages/contacts") // "/blog/pages/contacts"
    /// config.resolve_path("/")               // "/blog/"
    /// ```
    pub fn resolve_path(&self, path: &str) -> String {
        if url::Url::parse(path).is_ok() {
            return path.to_string();
        }

        let prefix = normalize_path_prefix(&self.path_prefix);
        let path = path.trim_start_matches('/');
        if prefix == "/" {
            format!("/{path}")
        } else {
            format!("{prefix}/{path}")
        }
    }

    /// Absolute URL of a site-relative path, or `None` if `url` is invalid.
    pub fn absolute_url(&self, path: &str) -> Option<String> {
        let resolved = self.resolve_path(path);
        let base = url::Url::parse(&self.url).ok()?;
        base.join(&resolved).ok().map(String::from)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.validate_url(&mut diag);
        self.validate_path_prefix(&mut diag);

        if self.title.trim().is_empty() {
            diag.error(Self::FIELDS.title, "site title must not be empty");
        }

        if self.posts_per_page == 0 {
            diag.error_with_hint(
                Self::FIELDS.posts_per_page,
                "must be greater than 0",
                format!("the default is {}", default_posts_per_page()),
            );
        }

        for (index, item) in self.menu.iter().enumerate() {
            item.validate(index, &mut diag);
        }

        self.author.validate(&mut diag);

        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// `url` must be an http(s) URL with a host.
    fn validate_url(&self, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }

    /// `pathPrefix` must be absolute and agree with the path part of `url`.
    fn validate_path_prefix(&self, diag: &mut ConfigDiagnostics) {
        if !self.path_prefix.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.path_prefix,
                format!("'{}' must start with '/'", self.path_prefix),
                format!("use \"{}\"", normalize_path_prefix(&self.path_prefix)),
            );
            return;
        }

        let prefix = normalize_path_prefix(&self.path_prefix);
        if let Some(url_path) = extract_url_path(&self.url)
            && !url_path.is_empty()
            && prefix != format!("/{url_path}")
        {
            diag.error_with_hint(
                Self::FIELDS.path_prefix,
                format!("'{prefix}' does not match the path of {}", Self::FIELDS.url),
                format!("use \"/{url_path}\" or drop the path from the url"),
            );
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!(
        "url = \"https://example.com\"\ntitle = \"Test\"\n{extra}\n[author]\nname = \"Test\"\n"
    );
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn expected_literal() -> serde_json::Value {
        json!({
            "url": "https://lumen.netlify.com",
            "pathPrefix": "/",
            "title": "Blog by Victor Mwenda",
            "subtitle": "Pellentesque odio nisi, euismod in, pharetra a, ultricies in, diam. Sed arcu.",
            "copyright": "© All rights reserved.",
            "disqusShortname": "",
            "postsPerPage": 4,
            "googleAnalyticsId": "UA-73379983-2",
            "useKatex": false,
            "menu": [
                { "label": "Articles", "path": "/" },
                { "label": "About me", "path": "https://victorkiambi.github.io/" },
                { "label": "Contact me", "path": "/pages/contacts" }
            ],
            "author": {
                "name": "Victor Mwenda",
                "photo": "/photo.jpg",
                "bio": "Just another Software Developer. Falling in love with JavaScript sprinkle in Java and add a handful of Docker, Kubernetes and AWS. Perfect recipe.",
                "contacts": {
                    "email": "",
                    "facebook": "#",
                    "telegram": "#",
                    "twitter": "#",
                    "github": "#",
                    "rss": "",
                    "vkontakte": "",
                    "linkedin": "#",
                    "instagram": "#",
                    "line": "",
                    "gitlab": "",
                    "weibo": "",
                    "codepen": "",
                    "youtube": "",
                    "soundcloud": "",
                    "medium": ""
                }
            }
        })
    }

    #[test]
    fn test_builtin_matches_literal() {
        let value = serde_json::to_value(site_config()).unwrap();
        assert_eq!(value, expected_literal());
    }

    #[test]
    fn test_builtin_menu_scenario() {
        let config = site_config();
        assert_eq!(config.posts_per_page, 4);
        assert!(!config.use_katex);
        assert_eq!(config.menu.len(), 3);
        assert_eq!(config.menu[0].label, "Articles");
        assert_eq!(config.menu[0].path, "/");
        assert!(config.menu[1].is_external());
        assert_eq!(config.menu[2].path, "/pages/contacts");
    }

    #[test]
    fn test_builtin_is_valid_and_shared() {
        assert!(site_config().validate().is_ok());
        assert!(std::ptr::eq(site_config(), site_config()));

        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| site_config().title.clone()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "Blog by Victor Mwenda");
        }
    }

    #[test]
    fn test_empty_string_disables_features() {
        let config = site_config();
        assert!(!config.comments_enabled());
        assert!(config.analytics_enabled());

        let visible: Vec<_> = config.author.contacts.visible().map(|(p, _)| p).collect();
        assert_eq!(
            visible,
            [
                Platform::Facebook,
                Platform::Telegram,
                Platform::Twitter,
                Platform::Github,
                Platform::Linkedin,
                Platform::Instagram,
            ]
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SiteConfig::lumen();
        let text = config.to_toml().unwrap();
        assert!(text.contains("postsPerPage = 4"));
        assert!(text.contains("[[menu]]"));
        assert_eq!(SiteConfig::from_str(&text).unwrap(), config);
    }

    #[test]
    fn test_json_round_trip() {
        let config = SiteConfig::lumen();
        let text = config.to_json().unwrap();
        assert_eq!(SiteConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn test_defaults_for_minimal_file() {
        let config = test_parse_config("");
        assert_eq!(config.path_prefix, "/");
        assert_eq!(config.posts_per_page, 4);
        assert!(!config.use_katex);
        assert!(config.menu.is_empty());
        assert!(!config.comments_enabled());
        assert!(!config.analytics_enabled());
        assert_eq!(config.author.contacts.visible().count(), 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_required_field() {
        let result = SiteConfig::from_str("title = \"No url\"\n[author]\nname = \"A\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[author\nname = \"A\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_posts_per_page_rejected() {
        let content = "url = \"https://example.com\"\ntitle = \"T\"\npostsPerPage = -1\n[author]\nname = \"A\"";
        assert!(SiteConfig::from_str(content).is_err());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "url = \"https://example.com\"\ntitle = \"T\"\npostPerPage = 10\n\
                       [author]\nname = \"A\"\n[author.contacts]\nmyspace = \"tom\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.posts_per_page, 4);
        assert_eq!(ignored, ["postPerPage", "author.contacts.myspace"]);

        match SiteConfig::from_str(content) {
            Err(ConfigError::UnknownFields(fields)) => assert_eq!(fields.len(), 2),
            other => panic!("expected unknown fields error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_menu_field_uses_index_syntax() {
        let content = "url = \"https://example.com\"\ntitle = \"T\"\n\
                       [[menu]]\nlabel = \"Articles\"\npath = \"/\"\nicon = \"home\"\n\
                       [author]\nname = \"A\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(ignored, ["menu[0].icon"]);

        let json = r#"{"url": "https://example.com", "title": "T",
            "menu": [{"label": "A", "path": "/"}, {"label": "B", "path": "/b", "icon": "x"}],
            "author": {"name": "A"}}"#;
        let (_, ignored) = SiteConfig::parse_json_with_ignored(json).unwrap();
        assert_eq!(ignored, ["menu[1].icon"]);
    }

    #[test]
    fn test_unknown_json_fields_detected() {
        let content = r#"{
            "url": "https://example.com",
            "title": "T",
            "author": { "name": "A", "contacts": { "github": "a", "icq": "1" } }
        }"#;
        let (_, ignored) = SiteConfig::parse_json_with_ignored(content).unwrap();
        assert_eq!(ignored, ["author.contacts.icq"]);
        assert!(matches!(
            SiteConfig::from_json(content),
            Err(ConfigError::UnknownFields(_))
        ));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = SiteConfig::lumen();
        config.url = "ftp://files.example.com".into();
        config.posts_per_page = 0;
        config.menu.push(MenuItem::new("", "/tags"));
        config.author.name.clear();

        let Err(ConfigError::Diagnostics(diag)) = config.validate() else {
            panic!("expected diagnostics");
        };
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["url", "postsPerPage", "menu[3].label", "author.name"]);
    }

    #[test]
    fn test_validate_invalid_url() {
        let mut config = SiteConfig::lumen();
        config.url = "lumen.netlify.com".into();
        let Err(ConfigError::Diagnostics(diag)) = config.validate() else {
            panic!("expected diagnostics");
        };
        assert!(diag.errors()[0].message.starts_with("invalid URL"));
    }

    #[test]
    fn test_validate_path_prefix() {
        let mut config = SiteConfig::lumen();
        config.path_prefix = "blog".into();
        assert!(config.validate().is_err());

        config.url = "https://victorkiambi.github.io/blog".into();
        config.path_prefix = "/blog/".into();
        assert!(config.validate().is_ok());

        config.path_prefix = "/notes".into();
        let Err(ConfigError::Diagnostics(diag)) = config.validate() else {
            panic!("expected diagnostics");
        };
        assert_eq!(diag.errors()[0].field, SiteConfig::FIELDS.path_prefix);
    }

    #[test]
    fn test_root_prefix_with_url_path_rejected() {
        let mut config = SiteConfig::lumen();
        config.url = "https://x.io/blog".into();
        config.path_prefix = "/".into();

        let Err(ConfigError::Diagnostics(diag)) = config.validate() else {
            panic!("expected diagnostics");
        };
        assert_eq!(diag.errors()[0].field, SiteConfig::FIELDS.path_prefix);
        assert_eq!(diag.errors()[0].hint.as_deref(), Some("use \"/blog\" or drop the path from the url"));

        config.path_prefix = "/blog".into();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.absolute_url("/photo.jpg").as_deref(),
            Some("https://x.io/blog/photo.jpg")
        );
    }

    #[test]
    fn test_resolve_path() {
        let mut config = SiteConfig::lumen();
        assert_eq!(config.resolve_path("/"), "/");
        assert_eq!(config.resolve_path("/pages/contacts"), "/pages/contacts");
        assert_eq!(config.resolve_path("photo.jpg"), "/photo.jpg");
        assert_eq!(
            config.resolve_path("https://victorkiambi.github.io/"),
            "https://victorkiambi.github.io/"
        );

        config.path_prefix = "/blog/".into();
        assert_eq!(config.resolve_path("/"), "/blog/");
        assert_eq!(config.resolve_path("/pages/contacts"), "/blog/pages/contacts");
    }

    #[test]
    fn test_absolute_url() {
        let mut config = SiteConfig::lumen();
        assert_eq!(
            config.absolute_url("/pages/contacts").as_deref(),
            Some("https://lumen.netlify.com/pages/contacts")
        );
        assert_eq!(
            config.absolute_url("/").as_deref(),
            Some("https://lumen.netlify.com/")
        );

        config.url = "https://victorkiambi.github.io/blog".into();
        config.path_prefix = "/blog".into();
        assert_eq!(
            config.absolute_url("/photo.jpg").as_deref(),
            Some("https://victorkiambi.github.io/blog/photo.jpg")
        );

        config.url = "not a url".into();
        assert_eq!(config.absolute_url("/"), None);
    }

    #[test]
    fn test_load_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::lumen();

        let toml_path = dir.path().join("site.toml");
        fs::write(&toml_path, config.to_toml().unwrap()).unwrap();
        assert_eq!(SiteConfig::load(&toml_path).unwrap(), config);

        let json_path = dir.path().join("site.json");
        fs::write(&json_path, config.to_json().unwrap()).unwrap();
        assert_eq!(SiteConfig::load(&json_path).unwrap(), config);
    }

    #[test]
    fn test_load_rejects_invalid_and_missing() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("site.toml");
        let err = SiteConfig::load(&missing).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(..))
        ));

        fs::write(
            &missing,
            "url = \"https://example.com\"\ntitle = \"T\"\npostsPerPage = 0\n[author]\nname = \"A\"",
        )
        .unwrap();
        let err = SiteConfig::load(&missing).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Diagnostics(_))
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("site.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("site.JSON")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("site.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("site")), ConfigFormat::Toml);
    }
}
