//! Backend seam shared by manifest and directory lookups

use std::path::PathBuf;

use crate::error::ResolveError;

/// Resolves a logical runfile path to a physical filesystem path.
///
/// Implementations are built once during discovery and never mutated, so
/// they can be shared across threads without locking. The logical path has
/// already been checked by [`is_normalized`](crate::is_normalized) and is
/// never absolute.
pub trait Backend: std::fmt::Debug + Send + Sync {
    /// Resolve `logical` to a physical path.
    fn resolve(&self, logical: &str) -> Result<PathBuf, ResolveError>;
}
