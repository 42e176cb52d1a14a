//! `[author]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [author]
//! name = "Victor Mwenda"
//! photo = "/photo.jpg"
//! bio = "Just another Software Developer."
//!
//! [author.contacts]
//! github = "victorkiambi"
//! ```

use super::Contacts;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Author shown in the sidebar widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name.
    pub name: String,

    /// Avatar path or URL.
    #[serde(default)]
    pub photo: String,

    /// Short biography.
    #[serde(default)]
    pub bio: String,

    /// Social contact links.
    #[serde(default)]
    pub contacts: Contacts,
}

pub struct AuthorFields {
    pub name: FieldPath,
}

impl Author {
    pub const FIELDS: AuthorFields = AuthorFields {
        name: FieldPath::new("author.name"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.name,
                "author name must not be empty",
                "set the name shown in the author widget",
            );
        }
    }
}
