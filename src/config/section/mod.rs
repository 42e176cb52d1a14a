//! Configuration section definitions.
//!
//! Each module corresponds to a nested table in `site.toml`:
//!
//! | Module     | TOML Section         | Purpose                        |
//! |------------|----------------------|--------------------------------|
//! | `author`   | `[author]`           | Author widget (name, bio)      |
//! | `contacts` | `[author.contacts]`  | Social links per platform      |
//! | `menu`     | `[[menu]]`           | Navigation entries             |

mod author;
mod contacts;
mod menu;

pub use author::{Author, AuthorFields};
pub use contacts::{Contacts, Platform, UnknownPlatform};
pub use menu::MenuItem;
