//! Navigation items built from directory entries.

use serde::Serialize;

use crate::name::{KNOWN_EXTENSIONS, strip_extension_in, title_from_name_in};
use crate::scanner::Entry;

/// One entry of the menu or side menu.
///
/// `children` is `None` when the item has no nested entries; it is then left
/// out of the serialized form altogether.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    /// Display text.
    pub text: String,
    /// Link target, relative to the site root.
    pub link: String,
    /// Nested items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavigationItem>>,
}

/// Build a navigation item for `entry` under `prefix`.
///
/// Directories link to `prefix + name + "/"`, files to `prefix + name` with a
/// known extension stripped. No children are attached.
pub fn build_link(entry: &Entry, prefix: &str) -> NavigationItem {
    build_link_in(entry, prefix, KNOWN_EXTENSIONS)
}

/// Same as [`build_link`] with a caller-supplied extension set.
pub fn build_link_in<S: AsRef<str>>(entry: &Entry, prefix: &str, extensions: &[S]) -> NavigationItem {
    let link = if entry.is_dir() {
        format!("{prefix}{}/", entry.name)
    } else {
        format!("{prefix}{}", strip_extension_in(&entry.name, extensions))
    };

    NavigationItem {
        text: title_from_name_in(&entry.name, extensions),
        link,
        children: None,
    }
}
