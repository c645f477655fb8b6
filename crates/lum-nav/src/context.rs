//! The document a navigation is built for.

use std::path::{Path, PathBuf};

use crate::name::{DEFAULT_CONTENT_EXTENSION, strip_known_extension};

/// Request error when mapping a URL path onto the source directory.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Path contains `.` or `..` segments.
    #[error("Invalid request path: {0}")]
    InvalidPath(String),
}

/// Location of the current document, both on disk and as a URL.
///
/// Directory requests point at the directory's `index` document and have
/// `base_path == base_dir`, both ending in `/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContext {
    /// Absolute path of the current document.
    pub file_path: PathBuf,
    /// Absolute parent directory of the current document.
    pub file_dir: PathBuf,
    /// URL path of the current document (e.g. `/docs/guide/`).
    pub base_path: String,
    /// URL path of the current document's directory (e.g. `/docs/`).
    pub base_dir: String,
    /// True if the current document is the site root.
    pub is_home: bool,
}

impl PageContext {
    /// Context for the site root.
    pub fn home(source_dir: &Path) -> Self {
        Self::directory(source_dir.to_path_buf(), "/".to_owned(), DEFAULT_CONTENT_EXTENSION, true)
    }

    /// Map a request path onto `source_dir`, assuming `.md` content files.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidPath`] for paths with `.` or `..` segments.
    pub fn resolve(source_dir: &Path, request_path: &str) -> Result<Self, ResolveError> {
        Self::resolve_with_extension(source_dir, request_path, DEFAULT_CONTENT_EXTENSION)
    }

    /// Map a request path onto `source_dir`.
    ///
    /// - `/` is the home page (`source_dir/index.<ext>`)
    /// - a path ending in `/`, or naming an existing directory, is that
    ///   directory's index document
    /// - anything else is `<path>.<ext>`; a trailing `.md`/`.html` in the
    ///   request is dropped first
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidPath`] for paths with `.` or `..` segments.
    pub fn resolve_with_extension(
        source_dir: &Path,
        request_path: &str,
        extension: &str,
    ) -> Result<Self, ResolveError> {
        let segments: Vec<&str> = request_path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.iter().any(|s| matches!(*s, "." | "..")) {
            return Err(ResolveError::InvalidPath(request_path.to_owned()));
        }

        let Some((last, parents)) = segments.split_last() else {
            return Ok(Self::directory(
                source_dir.to_path_buf(),
                "/".to_owned(),
                extension,
                true,
            ));
        };

        let target: PathBuf = source_dir.join(segments.iter().collect::<PathBuf>());
        if request_path.ends_with('/') || target.is_dir() {
            let base_path = format!("/{}/", segments.join("/"));
            return Ok(Self::directory(target, base_path, extension, false));
        }

        let file_dir = source_dir.join(parents.iter().collect::<PathBuf>());
        let stem = strip_known_extension(last);
        let base_dir = if parents.is_empty() {
            "/".to_owned()
        } else {
            format!("/{}/", parents.join("/"))
        };

        Ok(Self {
            file_path: file_dir.join(format!("{stem}.{extension}")),
            file_dir,
            base_path: format!("{base_dir}{stem}"),
            base_dir,
            is_home: false,
        })
    }

    /// URL prefix for links to entries of `file_dir`.
    ///
    /// `base_path` for directory requests, `base_dir` for documents, so a
    /// document's siblings link as `/docs/other` rather than `/docs/pageother`.
    pub fn link_prefix(&self) -> &str {
        if self.base_path.ends_with('/') {
            &self.base_path
        } else {
            &self.base_dir
        }
    }

    fn directory(dir: PathBuf, base_path: String, extension: &str, is_home: bool) -> Self {
        Self {
            file_path: dir.join(format!("index.{extension}")),
            file_dir: dir,
            base_dir: base_path.clone(),
            base_path,
            is_home,
        }
    }
}
