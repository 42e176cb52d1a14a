//! `[[menu]]` navigation entries.
//!
//! # Example
//!
//! ```toml
//! [[menu]]
//! label = "Articles"
//! path = "/"
//!
//! [[menu]]
//! label = "About me"
//! path = "https://victorkiambi.github.io/"
//! ```
//!
//! Entries render in file order.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// A single navigation menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Text shown in the navigation bar.
    pub label: String,

    /// Site-relative path (`/pages/contacts`) or absolute URL.
    pub path: String,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// Returns true if `path` points outside the site (absolute http/https URL).
    pub fn is_external(&self) -> bool {
        url::Url::parse(&self.path)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false)
    }

    /// Validate a menu entry at position `index`.
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        if self.label.trim().is_empty() {
            diag.error_with_hint(
                FieldPath::indexed("menu", index, "label"),
                "menu label must not be empty",
                "set the text shown in the navigation bar",
            );
        }
        if self.path.trim().is_empty() {
            diag.error_with_hint(
                FieldPath::indexed("menu", index, "path"),
                "menu path must not be empty",
                "use a site path like \"/\" or a full URL",
            );
        }
    }
}
