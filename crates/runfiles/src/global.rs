//! Process-wide runfiles
//!
//! The first call to any function here runs discovery with default
//! [`Options`](crate::Options). The outcome, success or failure, is kept
//! for the rest of the process and discovery is never retried. Callers that
//! need hermetic or overridable behavior should use
//! [`Runfiles::new`](crate::Runfiles::new) instead.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use crate::discovery::Options;
use crate::error::{Error, Result};
use crate::runfiles::Runfiles;

static GLOBAL: OnceLock<std::result::Result<Runfiles, Arc<Error>>> = OnceLock::new();

/// The process-wide [`Runfiles`], discovering it on first use.
pub fn runfiles() -> Result<&'static Runfiles> {
    get_or_discover(&GLOBAL, || Runfiles::new(Options::new()))
}

/// Absolute path of a runfile, using the process-wide [`Runfiles`].
///
/// See [`Runfiles::path`].
pub fn path(logical: &str) -> Result<PathBuf> {
    runfiles()?.path(logical)
}

/// Same as [`path`].
pub fn rlocation(logical: &str) -> Result<PathBuf> {
    path(logical)
}

/// Environment entries to pass to subprocesses, using the process-wide
/// [`Runfiles`].
///
/// See [`Runfiles::env`].
pub fn env() -> Result<Vec<String>> {
    Ok(runfiles()?.env())
}

fn get_or_discover<F>(
    cell: &'static OnceLock<std::result::Result<Runfiles, Arc<Error>>>,
    discover: F,
) -> Result<&'static Runfiles>
where
    F: FnOnce() -> Result<Runfiles>,
{
    cell.get_or_init(|| discover().map_err(Arc::new))
        .as_ref()
        .map_err(|err| Error::Global(Arc::clone(err)))
}
