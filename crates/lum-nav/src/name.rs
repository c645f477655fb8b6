//! Display names derived from file names.

/// Extensions stripped from file names when building links and titles.
pub const KNOWN_EXTENSIONS: &[&str] = &["html", "md"];

/// Extension of renderable content files.
pub const DEFAULT_CONTENT_EXTENSION: &str = "md";

/// Strip a trailing `.html` or `.md` from `name`.
///
/// Only the last extension is considered and it is removed at most once:
/// `notes.md.md` becomes `notes.md`, `archive.tar` is returned unchanged.
pub fn strip_known_extension(name: &str) -> &str {
    strip_extension_in(name, KNOWN_EXTENSIONS)
}

/// Strip the last extension of `name` if it is one of `extensions`.
///
/// Extensions are given without the leading dot and compared case-sensitively.
pub fn strip_extension_in<'a, S: AsRef<str>>(name: &'a str, extensions: &[S]) -> &'a str {
    let Some((stem, ext)) = name.rsplit_once('.') else {
        return name;
    };
    if extensions.iter().any(|known| known.as_ref() == ext) {
        stem
    } else {
        name
    }
}

/// Turn a file name into a display title.
///
/// Strips a known extension, replaces `-` and `_` with spaces and capitalizes
/// the first character. The rest of the name keeps its case.
///
/// # Examples
///
/// ```
/// use lum_nav::title_from_name;
///
/// assert_eq!(title_from_name("my-page_name.md"), "My page name");
/// assert_eq!(title_from_name("API_reference"), "API reference");
/// ```
pub fn title_from_name(name: &str) -> String {
    title_from_name_in(name, KNOWN_EXTENSIONS)
}

/// Same as [`title_from_name`] with a caller-supplied extension set.
pub fn title_from_name_in<S: AsRef<str>>(name: &str, extensions: &[S]) -> String {
    let mut chars = strip_extension_in(name, extensions)
        .chars()
        .map(|c| if matches!(c, '-' | '_') { ' ' } else { c });

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
