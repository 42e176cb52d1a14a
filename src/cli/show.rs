//! `lumen show` and `lumen contacts`.

use anyhow::Result;
use lumen_config::{ConfigFormat, SiteConfig};

/// Serialize a configuration for printing.
pub fn render_config(config: &SiteConfig, format: ConfigFormat) -> Result<String> {
    Ok(config.serialize_as(format)?)
}

/// One `platform  href` line per visible contact, in render order.
pub fn contact_lines(config: &SiteConfig) -> Vec<String> {
    config
        .author
        .contacts
        .visible()
        .filter_map(|(platform, value)| {
            platform
                .href(value)
                .map(|href| format!("{:<10} {href}", platform.as_str()))
        })
        .collect()
}
