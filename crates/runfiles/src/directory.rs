//! Directory-backed runfiles lookup

use std::path::{Path, PathBuf};

use crate::backend::Backend;
use crate::error::ResolveError;
use crate::path::join_slash;

/// A runfiles tree laid out on disk.
///
/// Lookups only join paths; nothing is checked until the caller opens the
/// returned path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    root: PathBuf,
}

impl Directory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The runfiles root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Backend for Directory {
    fn resolve(&self, logical: &str) -> Result<PathBuf, ResolveError> {
        Ok(join_slash(&self.root, logical))
    }
}
