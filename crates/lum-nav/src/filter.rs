//! Entry predicates deciding what shows up in navigation.
//!
//! These are passed to [`scan`](crate::scan) as filters. They only look at the
//! entry's name and kind.

use crate::name::DEFAULT_CONTENT_EXTENSION;
use crate::scanner::Entry;

/// True for names starting with `.` or `_`.
pub fn is_private(name: &str) -> bool {
    name.starts_with(['.', '_'])
}

/// Directories that are not private.
pub fn is_navigable_directory(entry: &Entry) -> bool {
    entry.is_dir() && !is_private(&entry.name)
}

/// Regular `.md` files that are not private.
pub fn is_content_file(entry: &Entry) -> bool {
    is_content_file_with(entry, DEFAULT_CONTENT_EXTENSION)
}

/// Build a content-file predicate for a given extension (without the dot).
pub fn content_file_filter(extension: &str) -> impl Fn(&Entry) -> bool + '_ {
    move |entry| is_content_file_with(entry, extension)
}

fn is_content_file_with(entry: &Entry, extension: &str) -> bool {
    entry.is_file()
        && !is_private(&entry.name)
        && entry
            .name
            .strip_suffix(extension)
            .is_some_and(|stem| stem.ends_with('.'))
}
