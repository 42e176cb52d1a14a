//! Config file generation.
//!
//! Materializes the built-in record as an editable `site.toml` (or JSON).

use anyhow::{Context, Result, bail};
use lumen_config::{ConfigFormat, SiteConfig, log};
use std::{fs, path::Path};

/// Render the built-in configuration with a header comment for TOML output.
pub fn generate_config(format: ConfigFormat) -> Result<String> {
    let body = SiteConfig::lumen().serialize_as(format)?;
    Ok(match format {
        ConfigFormat::Toml => format!(
            "# Lumen site configuration (v{})\n# Empty strings hide a link or disable a feature.\n\n{body}",
            env!("CARGO_PKG_VERSION")
        ),
        ConfigFormat::Json => format!("{body}\n"),
    })
}

/// Write the built-in configuration to `path`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_config(path: &Path, format: Option<ConfigFormat>, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file '{}' already exists, use --force to overwrite",
            path.display()
        );
    }

    let format = format.unwrap_or_else(|| ConfigFormat::from_path(path));
    let content = generate_config(format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
