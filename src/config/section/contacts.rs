//! `[author.contacts]` social links.
//!
//! Keys are limited to the platforms in [`Platform::ALL`]; anything else is
//! reported as an unknown field when the file is parsed. An empty value hides
//! the link.
//!
//! # Example
//!
//! ```toml
//! [author.contacts]
//! email = "victor@example.com"
//! github = "victorkiambi"
//! twitter = ""
//! ```

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A contact platform the author widget knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Email,
    Facebook,
    Telegram,
    Twitter,
    Github,
    Rss,
    Vkontakte,
    Linkedin,
    Instagram,
    Line,
    Gitlab,
    Weibo,
    Codepen,
    Youtube,
    Soundcloud,
    Medium,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown contact platform `{0}`")]
pub struct UnknownPlatform(pub String);

impl Platform {
    /// Every platform, in render order.
    pub const ALL: [Self; 16] = [
        Self::Email,
        Self::Facebook,
        Self::Telegram,
        Self::Twitter,
        Self::Github,
        Self::Rss,
        Self::Vkontakte,
        Self::Linkedin,
        Self::Instagram,
        Self::Line,
        Self::Gitlab,
        Self::Weibo,
        Self::Codepen,
        Self::Youtube,
        Self::Soundcloud,
        Self::Medium,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Facebook => "facebook",
            Self::Telegram => "telegram",
            Self::Twitter => "twitter",
            Self::Github => "github",
            Self::Rss => "rss",
            Self::Vkontakte => "vkontakte",
            Self::Linkedin => "linkedin",
            Self::Instagram => "instagram",
            Self::Line => "line",
            Self::Gitlab => "gitlab",
            Self::Weibo => "weibo",
            Self::Codepen => "codepen",
            Self::Youtube => "youtube",
            Self::Soundcloud => "soundcloud",
            Self::Medium => "medium",
        }
    }

    /// Link target for a contact value.
    ///
    /// Returns `None` for an empty value (link hidden). Values that already
    /// look like links (absolute URL, `#` anchor, `/` path) pass through;
    /// bare handles are expanded per platform.
    ///
    /// ```ignore
    /// Platform::Github.href("victorkiambi") // Some("https://github.com/victorkiambi")
    /// Platform::Email.href("me@example.com") // Some("mailto:me@example.com")
    /// Platform::Twitter.href("")             // None
    /// ```
    pub fn href(self, value: &str) -> Option<String> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        if value.starts_with('#') || value.starts_with('/') || url::Url::parse(value).is_ok() {
            return Some(value.to_string());
        }

        let href = match self {
            Self::Email => format!("mailto:{value}"),
            Self::Twitter => format!("https://www.twitter.com/{value}"),
            Self::Github => format!("https://github.com/{value}"),
            Self::Telegram => format!("tg://resolve?domain={value}"),
            Self::Vkontakte => format!("https://vk.com/{value}"),
            Self::Line => format!("line://ti/p/{value}"),
            Self::Gitlab => format!("https://www.gitlab.com/{value}"),
            Self::Weibo => format!("https://weibo.com/{value}"),
            Self::Codepen => format!("https://www.codepen.io/{value}"),
            Self::Youtube => format!("https://www.youtube.com/channel/{value}"),
            Self::Soundcloud => format!("https://soundcloud.com/{value}"),
            Self::Medium => format!("https://medium.com/{value}"),
            Self::Facebook | Self::Rss | Self::Linkedin | Self::Instagram => value.to_string(),
        };
        Some(href)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

/// Author contact links, one slot per [`Platform`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contacts {
    pub email: String,
    pub facebook: String,
    pub telegram: String,
    pub twitter: String,
    pub github: String,
    pub rss: String,
    pub vkontakte: String,
    pub linkedin: String,
    pub instagram: String,
    pub line: String,
    pub gitlab: String,
    pub weibo: String,
    pub codepen: String,
    pub youtube: String,
    pub soundcloud: String,
    pub medium: String,
}

impl Contacts {
    pub fn get(&self, platform: Platform) -> &str {
        match platform {
            Platform::Email => &self.email,
            Platform::Facebook => &self.facebook,
            Platform::Telegram => &self.telegram,
            Platform::Twitter => &self.twitter,
            Platform::Github => &self.github,
            Platform::Rss => &self.rss,
            Platform::Vkontakte => &self.vkontakte,
            Platform::Linkedin => &self.linkedin,
            Platform::Instagram => &self.instagram,
            Platform::Line => &self.line,
            Platform::Gitlab => &self.gitlab,
            Platform::Weibo => &self.weibo,
            Platform::Codepen => &self.codepen,
            Platform::Youtube => &self.youtube,
            Platform::Soundcloud => &self.soundcloud,
            Platform::Medium => &self.medium,
        }
    }

    /// All slots in render order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &str)> + '_ {
        Platform::ALL.into_iter().map(|p| (p, self.get(p)))
    }

    /// Only the slots that should be rendered (non-empty value).
    pub fn visible(&self) -> impl Iterator<Item = (Platform, &str)> + '_ {
        self.iter().filter(|(_, value)| !value.is_empty())
    }
}
