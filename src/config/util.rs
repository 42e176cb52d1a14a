//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Path component of a URL with surrounding slashes trimmed
///
/// Port, credentials, query and fragment are ignored. Returns `None` when
/// the string is not an absolute URL.
///
/// # Examples
/// ```ignore
/// extract_url_path("https://lumen.netlify.com")            -> Some("")
/// extract_url_path("https://victorkiambi.github.io/blog/") -> Some("blog")
/// extract_url_path("/pages/contacts")                      -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    Some(parsed.path().trim_matches('/').to_string())
}

/// Normalize a path prefix to a leading slash and no trailing slash
///
/// The root prefix stays `/`.
pub fn normalize_path_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Find config file by searching upward from current directory
///
/// An absolute `config_name` that exists is returned as is. Otherwise each
/// directory from cwd up to the filesystem root is tried in turn.
///
/// # Example
/// ```text
/// /home/victor/blog/content/posts/  ← cwd
/// /home/victor/blog/site.toml       ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting at `start` instead of cwd.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.exists())
}

// ============================================================================
// tests
// ============================================================================
