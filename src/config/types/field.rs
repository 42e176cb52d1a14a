//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::{borrow::Cow, fmt};

/// A wrapper for config field paths as they appear in `site.toml`.
///
/// Static paths come from the `FIELDS` constants on each section;
/// paths into sequences are built with [`FieldPath::indexed`].
///
/// # Example
///
/// ```ignore
/// diag.error(SiteConfig::FIELDS.posts_per_page, "must be greater than 0");
/// diag.error(FieldPath::indexed("menu", 2, "label"), "must not be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Path to a field of the `index`-th element of a sequence,
    /// e.g. `menu[0].label`.
    pub fn indexed(sequence: &str, index: usize, field: &str) -> Self {
        Self(Cow::Owned(format!("{sequence}[{index}].{field}")))
    }

    /// Path of a key skipped during deserialization, spelled like the
    /// diagnostics spell it (`menu[0].icon`, not `menu.0.icon`).
    pub fn from_ignored(path: &serde_ignored::Path<'_>) -> Self {
        fn push(path: &serde_ignored::Path<'_>, out: &mut String) {
            use serde_ignored::Path;
            match path {
                Path::Root => {}
                Path::Seq { parent, index } => {
                    push(parent, out);
                    out.push_str(&format!("[{index}]"));
                }
                Path::Map { parent, key } => {
                    push(parent, out);
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(key);
                }
                Path::Some { parent }
                | Path::NewtypeStruct { parent }
                | Path::NewtypeVariant { parent } => push(parent, out),
            }
        }

        let mut out = String::new();
        push(path, &mut out);
        Self(Cow::Owned(out))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_path() {
        assert_eq!(FieldPath::indexed("menu", 2, "label").as_str(), "menu[2].label");
    }

    #[test]
    fn test_ignored_path_matches_indexed() {
        use serde_ignored::Path;

        let menu = Path::Map {
            parent: &Path::Root,
            key: "menu".into(),
        };
        let entry = Path::Seq {
            parent: &menu,
            index: 0,
        };
        let icon = Path::Map {
            parent: &entry,
            key: "icon".into(),
        };
        assert_eq!(
            FieldPath::from_ignored(&icon),
            FieldPath::indexed("menu", 0, "icon")
        );
        assert_eq!(FieldPath::from_ignored(&menu).as_str(), "menu");
    }

    #[test]
    fn test_static_path() {
        const URL: FieldPath = FieldPath::new("url");
        assert_eq!(URL.as_str(), "url");
        assert_eq!(URL, FieldPath::new("url"));
    }
}
