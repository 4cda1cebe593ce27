//! The [`Runfiles`] lookup object

use std::ffi::OsStr;
use std::fs::{self, File, Metadata};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::backend::Backend;
use crate::constants::RunfilesVar;
use crate::directory::Directory;
use crate::discovery::Source;
use crate::error::{Error, Result, RunfileError};
use crate::manifest::Manifest;
use crate::path::{is_normalized, is_unrooted_backslash};

/// Access to the runfiles of the current program.
///
/// Create one with [`Runfiles::new`]. The default value has no backend and
/// fails every lookup. A `Runfiles` never changes after construction, so it
/// can be shared between threads freely.
#[derive(Debug, Default)]
pub struct Runfiles {
    backend: Option<Box<dyn Backend>>,
    /// Variable re-exported to subprocesses.
    export: Option<(RunfilesVar, PathBuf)>,
    source: Option<Source>,
}

impl Runfiles {
    pub(crate) fn from_backend(
        backend: impl Backend + 'static,
        location: PathBuf,
        source: Source,
    ) -> Self {
        Self {
            backend: Some(Box::new(backend)),
            export: Some((source.var(), location)),
            source: Some(source),
        }
    }

    /// Absolute path of a runfile.
    ///
    /// `logical` is relative to the runfiles root and uses `/` as separator,
    /// typically `"repo/path/to/pkg/file"`. Absolute paths are returned as
    /// they are. If the manifest maps `logical` to an empty runfile, the
    /// error reports [`Error::is_empty_runfile`].
    pub fn path(&self, logical: &str) -> Result<PathBuf> {
        let backend = self.backend.as_deref().ok_or(Error::Uninitialized)?;

        if logical.is_empty() {
            return Err(Error::EmptyPath);
        }
        if !is_normalized(logical) {
            return Err(Error::NotNormalized {
                path: logical.to_string(),
            });
        }
        if is_unrooted_backslash(logical) {
            return Err(Error::NoDriveLetter {
                path: logical.to_string(),
            });
        }
        if Path::new(logical).is_absolute() {
            return Ok(PathBuf::from(logical));
        }

        backend
            .resolve(logical)
            .map_err(|source| RunfileError::new(logical, source).into())
    }

    /// Same as [`Runfiles::path`].
    pub fn rlocation(&self, logical: &str) -> Result<PathBuf> {
        self.path(logical)
    }

    /// Environment entries to pass to subprocesses, as `KEY=VALUE`.
    ///
    /// Append these after the inherited environment so they take precedence.
    /// Empty for an uninitialized value. A location that is not valid UTF-8
    /// is converted lossily; use [`Runfiles::env_vars`] or
    /// [`Runfiles::configure_command`] to pass it on unchanged.
    pub fn env(&self) -> Vec<String> {
        self.export
            .iter()
            .map(|(var, location)| format!("{}={}", var, location.display()))
            .collect()
    }

    /// Same entries as [`Runfiles::env`], as key/value pairs.
    pub fn env_vars(&self) -> Vec<(&'static str, &OsStr)> {
        self.export
            .iter()
            .map(|(var, location)| (var.as_str(), location.as_os_str()))
            .collect()
    }

    /// Add the runfiles variables to a command's environment.
    pub fn configure_command<'a>(&self, command: &'a mut Command) -> &'a mut Command {
        command.envs(self.env_vars())
    }

    /// How this value was discovered; `None` when uninitialized.
    pub fn source(&self) -> Option<Source> {
        self.source
    }

    /// Open a runfile for reading.
    pub fn open(&self, logical: &str) -> Result<File> {
        let path = self.path(logical)?;
        File::open(&path).map_err(|e| Error::io(path, e))
    }

    /// Metadata of a runfile, following symlinks.
    pub fn metadata(&self, logical: &str) -> Result<Metadata> {
        let path = self.path(logical)?;
        fs::metadata(&path).map_err(|e| Error::io(path, e))
    }

    /// Read a runfile. Empty runfiles read as no bytes.
    pub fn read(&self, logical: &str) -> Result<Vec<u8>> {
        match self.path(logical) {
            Ok(path) => fs::read(&path).map_err(|e| Error::io(path, e)),
            Err(e) if e.is_empty_runfile() => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    /// Read a runfile as UTF-8 text. Empty runfiles read as `""`.
    pub fn read_to_string(&self, logical: &str) -> Result<String> {
        match self.path(logical) {
            Ok(path) => fs::read_to_string(&path).map_err(|e| Error::io(path, e)),
            Err(e) if e.is_empty_runfile() => Ok(String::new()),
            Err(e) => Err(e),
        }
    }
}

impl From<Manifest> for Runfiles {
    fn from(manifest: Manifest) -> Self {
        let location = manifest.file().to_path_buf();
        Self::from_backend(manifest, location, Source::ManifestOption)
    }
}

impl From<Directory> for Runfiles {
    fn from(directory: Directory) -> Self {
        let location = directory.root().to_path_buf();
        Self::from_backend(directory, location, Source::DirectoryOption)
    }
}
