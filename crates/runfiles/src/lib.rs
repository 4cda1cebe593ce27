//! Runfiles lookup for build-system packaged programs
//!
//! Finds data files that a build system ships next to a compiled program,
//! whether they were delivered as a runfiles directory tree or as a
//! manifest file mapping logical names to physical paths.
//!
//! Two entry points are provided:
//!
//! - The process-wide functions [`path`], [`rlocation`] and [`env`], which
//!   run discovery once and reuse the outcome for the life of the process.
//! - [`Runfiles::new`] with [`Options`], for callers that need hermetic or
//!   overridable discovery.
//!
//! ```rust,no_run
//! use std::process::Command;
//!
//! let runfiles = runfiles::Runfiles::new(runfiles::Options::new())?;
//! let data = runfiles.path("my_repo/pkg/testdata/input.txt")?;
//!
//! let mut child = Command::new("tool");
//! child.arg(&data);
//! runfiles.configure_command(&mut child);
//! # Ok::<(), runfiles::Error>(())
//! ```

pub mod backend;
pub mod constants;
pub mod directory;
pub mod discovery;
pub mod error;
pub mod global;
pub mod manifest;
pub mod path;
pub mod runfiles;

pub use backend::Backend;
pub use constants::RunfilesVar;
pub use directory::Directory;
pub use discovery::{Options, Source};
pub use error::{Error, ResolveError, Result, RunfileError};
pub use global::{env, path, rlocation};
pub use manifest::Manifest;
pub use path::is_normalized;
pub use runfiles::Runfiles;
