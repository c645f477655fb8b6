//! Directory listing with filtering and deterministic ordering.
//!
//! [`scan`] reads the immediate children of one directory, keeps the entries
//! accepted by a filter and returns them sorted by name. It never recurses;
//! callers that need a second level scan again.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Kind of a directory entry, taken from the entry itself.
///
/// Symbolic links are not followed and report [`EntryKind::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Anything else (symlink, socket, device, ...).
    Other,
}

impl From<fs::FileType> for EntryKind {
    fn from(file_type: fs::FileType) -> Self {
        if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

/// A directory entry retained by [`scan`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// File name (lossily converted to UTF-8).
    pub name: String,
    /// Entry kind.
    pub kind: EntryKind,
}

impl Entry {
    /// Create an entry from a name and kind.
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// True if the entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// True if the entry is a regular file.
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Why a directory could not be listed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanErrorKind {
    /// Directory does not exist.
    NotFound,
    /// Directory exists but cannot be read.
    PermissionDenied,
    /// Path exists but is not a directory.
    NotADirectory,
    /// Any other I/O failure.
    Other,
}

impl From<io::ErrorKind> for ScanErrorKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::NotADirectory => Self::NotADirectory,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind_str = match self {
            Self::NotFound => "Directory not found",
            Self::PermissionDenied => "Permission denied",
            Self::NotADirectory => "Not a directory",
            Self::Other => "Cannot read directory",
        };
        f.write_str(kind_str)
    }
}

/// Directory listing failure with the offending path.
#[derive(Debug, thiserror::Error)]
#[error("{kind}: {source} (path: {})", .path.display())]
pub struct ScanError {
    /// Semantic error category.
    pub kind: ScanErrorKind,
    /// Directory that failed to list.
    pub path: PathBuf,
    source: io::Error,
}

impl ScanError {
    /// Create a scan error from an I/O error.
    #[must_use]
    pub fn io(err: io::Error, path: impl Into<PathBuf>) -> Self {
        Self {
            kind: err.kind().into(),
            path: path.into(),
            source: err,
        }
    }

    /// True if the directory does not exist.
    pub fn is_not_found(&self) -> bool {
        self.kind == ScanErrorKind::NotFound
    }
}

/// List `directory`, keep entries accepted by `filter`, sort them by name.
///
/// Names are compared byte-wise, so the order is case-sensitive (`Zebra`
/// sorts before `apple`). Entries whose metadata cannot be read are skipped.
///
/// # Errors
///
/// Returns [`ScanError`] if the directory cannot be opened.
pub fn scan<F>(directory: &Path, filter: F) -> Result<Vec<Entry>, ScanError>
where
    F: Fn(&Entry) -> bool,
{
    tracing::debug!(path = %directory.display(), "Scanning directory");

    let read_dir = fs::read_dir(directory).map_err(|e| ScanError::io(e, directory))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(dir_entry) => dir_entry,
            Err(e) => {
                tracing::warn!(path = %directory.display(), error = %e, "Skipping unreadable entry");
                continue;
            }
        };
        let file_type = match dir_entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                tracing::warn!(path = %dir_entry.path().display(), error = %e, "Skipping entry without file type");
                continue;
            }
        };

        let entry = Entry::new(dir_entry.file_name().to_string_lossy(), file_type.into());
        if filter(&entry) {
            entries.push(entry);
        }
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    tracing::debug!(path = %directory.display(), count = entries.len(), "Scanned directory");
    Ok(entries)
}
