//! Runfiles discovery
//!
//! Chooses between a manifest and a runfiles directory. Sources are tried in
//! a fixed order and the first hit wins:
//!
//! 1. An explicit manifest file ([`Options::manifest_file`]), else
//!    `RUNFILES_MANIFEST_FILE`
//! 2. An explicit directory ([`Options::directory`]), else `RUNFILES_DIR`
//! 3. `<program>.runfiles_manifest`, if it is a regular file
//! 4. `<program>.runfiles`, if it is a directory
//!
//! The program name defaults to the first command-line argument.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{DIRECTORY_SUFFIX, MANIFEST_SUFFIX, RunfilesVar};
use crate::directory::Directory;
use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::runfiles::Runfiles;

/// Overrides for runfiles discovery.
///
/// Empty values count as unset. When both a manifest file and a directory
/// are given, the manifest wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    manifest_file: Option<PathBuf>,
    directory: Option<PathBuf>,
    program_name: Option<OsString>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this manifest file instead of consulting the environment.
    pub fn manifest_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_file = non_empty_path(path.into());
        self
    }

    /// Use this runfiles directory instead of consulting the environment.
    pub fn directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.directory = non_empty_path(path.into());
        self
    }

    /// Program name used to probe for `<program>.runfiles_manifest` and
    /// `<program>.runfiles`. Defaults to the first command-line argument.
    pub fn program_name(mut self, name: impl Into<OsString>) -> Self {
        let name = name.into();
        self.program_name = (!name.is_empty()).then_some(name);
        self
    }
}

/// How a [`Runfiles`] value was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// Manifest file passed through [`Options::manifest_file`]
    ManifestOption,
    /// Manifest file named by `RUNFILES_MANIFEST_FILE`
    ManifestEnv,
    /// Directory passed through [`Options::directory`]
    DirectoryOption,
    /// Directory named by `RUNFILES_DIR`
    DirectoryEnv,
    /// `<program>.runfiles_manifest` next to the program
    ProgramManifest,
    /// `<program>.runfiles` next to the program
    ProgramDirectory,
}

impl Source {
    /// The environment variable that propagates this mechanism.
    pub fn var(&self) -> RunfilesVar {
        match self {
            Self::ManifestOption | Self::ManifestEnv | Self::ProgramManifest => {
                RunfilesVar::ManifestFile
            }
            Self::DirectoryOption | Self::DirectoryEnv | Self::ProgramDirectory => {
                RunfilesVar::Directory
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManifestOption => "manifest-option",
            Self::ManifestEnv => "manifest-env",
            Self::DirectoryOption => "directory-option",
            Self::DirectoryEnv => "directory-env",
            Self::ProgramManifest => "program-manifest",
            Self::ProgramDirectory => "program-directory",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Runfiles {
    /// Discover runfiles using `options`, the process environment and the
    /// program name.
    ///
    /// See the [module documentation](crate::discovery) for the search order.
    pub fn new(options: Options) -> Result<Self> {
        discover(
            options,
            |var| std::env::var_os(var.as_str()),
            || std::env::args_os().next(),
        )
    }
}

/// Discovery with injectable environment and program-name lookups.
///
/// `program` is only called when neither a manifest nor a directory was
/// found through options or `env`.
pub(crate) fn discover<E, P>(options: Options, env: E, program: P) -> Result<Runfiles>
where
    E: Fn(RunfilesVar) -> Option<OsString>,
    P: FnOnce() -> Option<OsString>,
{
    let Options {
        manifest_file,
        directory,
        program_name,
    } = options;

    let manifest = manifest_file
        .map(|path| (path, Source::ManifestOption))
        .or_else(|| env_path(&env, RunfilesVar::ManifestFile).map(|p| (p, Source::ManifestEnv)));
    if let Some((path, source)) = manifest {
        return from_manifest(path, source);
    }

    let directory = directory
        .map(|path| (path, Source::DirectoryOption))
        .or_else(|| env_path(&env, RunfilesVar::Directory).map(|p| (p, Source::DirectoryEnv)));
    if let Some((path, source)) = directory {
        return Ok(from_directory(path, source));
    }

    let Some(program) = program_name.or_else(|| program().filter(|p| !p.is_empty())) else {
        tracing::debug!("No program name available for runfiles discovery");
        return Err(Error::NotFound);
    };

    let manifest = with_suffix(&program, MANIFEST_SUFFIX);
    if is_regular_file(&manifest) {
        return from_manifest(manifest, Source::ProgramManifest);
    }

    let dir = with_suffix(&program, DIRECTORY_SUFFIX);
    if dir.is_dir() {
        return Ok(from_directory(dir, Source::ProgramDirectory));
    }

    tracing::debug!(
        program = %Path::new(&program).display(),
        "No runfiles manifest or directory next to program"
    );
    Err(Error::NotFound)
}

fn from_manifest(path: PathBuf, source: Source) -> Result<Runfiles> {
    tracing::debug!(%source, manifest = %path.display(), "Using runfiles manifest");
    let manifest = Manifest::from_file(&path)?;
    Ok(Runfiles::from_backend(manifest, path, source))
}

fn from_directory(path: PathBuf, source: Source) -> Runfiles {
    tracing::debug!(%source, directory = %path.display(), "Using runfiles directory");
    Runfiles::from_backend(Directory::new(path.clone()), path, source)
}

fn env_path<E>(env: &E, var: RunfilesVar) -> Option<PathBuf>
where
    E: Fn(RunfilesVar) -> Option<OsString>,
{
    env(var).map(PathBuf::from).and_then(non_empty_path)
}

fn non_empty_path(path: PathBuf) -> Option<PathBuf> {
    (!path.as_os_str().is_empty()).then_some(path)
}

fn with_suffix(program: &OsString, suffix: &str) -> PathBuf {
    let mut name = program.clone();
    name.push(suffix);
    PathBuf::from(name)
}

fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}
