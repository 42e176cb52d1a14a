//! `lumen check`: load and validate a config file.

use anyhow::Result;
use lumen_config::{SiteConfig, log};
use std::path::Path;

pub fn check_config(path: &Path) -> Result<SiteConfig> {
    let config = SiteConfig::load(path)?;
    log!(
        "check";
        "{} is valid ({} menu entries, {} posts per page)",
        path.display(),
        config.menu.len(),
        config.posts_per_page
    );
    Ok(config)
}
