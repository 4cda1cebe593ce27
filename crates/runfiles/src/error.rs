//! Error types for runfiles

use std::path::PathBuf;
use std::sync::Arc;

/// Result type for runfiles operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while discovering or resolving runfiles
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("runfiles: path may not be empty")]
    EmptyPath,

    #[error("runfiles: path {path:?} is not normalized")]
    NotNormalized { path: String },

    #[error("runfiles: path {path:?} is absolute without a drive letter")]
    NoDriveLetter { path: String },

    #[error("runfiles: uninitialized Runfiles object")]
    Uninitialized,

    #[error(transparent)]
    Runfile(#[from] RunfileError),

    #[error("runfiles: bad manifest line {line_number} {line:?} in file {}", .file.display())]
    MalformedManifest {
        file: PathBuf,
        line_number: usize,
        line: String,
    },

    #[error("runfiles: I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("runfiles: no runfiles found")]
    NotFound,

    /// Discovery for the process-wide instance failed; the failure is permanent.
    #[error(transparent)]
    Global(Arc<Error>),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error reports a runfile mapped to the empty sentinel.
    ///
    /// Such runfiles are intentionally absent from the filesystem; callers may
    /// create them as empty files or skip them.
    pub fn is_empty_runfile(&self) -> bool {
        match self {
            Self::Runfile(err) => err.is_empty(),
            Self::Global(err) => err.is_empty_runfile(),
            _ => false,
        }
    }

    /// Whether this error reports a logical path with no manifest entry.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Runfile(err) => matches!(err.source, ResolveError::NotFound),
            Self::Global(err) => err.is_not_found(),
            _ => false,
        }
    }
}

/// A failure to look up one runfile.
#[derive(Debug, thiserror::Error)]
#[error("runfile {name}: {source}")]
pub struct RunfileError {
    /// Logical runfile name that caused the failure.
    pub name: String,
    /// Underlying backend failure.
    #[source]
    pub source: ResolveError,
}

impl RunfileError {
    pub fn new(name: impl Into<String>, source: ResolveError) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    /// Whether the runfile is present only as an empty-sentinel entry.
    pub fn is_empty(&self) -> bool {
        matches!(self.source, ResolveError::Empty)
    }
}

/// Failures reported by a [`Backend`](crate::Backend).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No entry and no covering directory entry.
    #[error("file does not exist")]
    NotFound,

    /// The runfile isn't present in the filesystem but should be created as
    /// an empty file if necessary.
    #[error("empty runfile")]
    Empty,
}
