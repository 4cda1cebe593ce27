//! Environment variables and file-name suffixes used during discovery.

/// Environment variables that select a runfiles mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunfilesVar {
    /// `RUNFILES_MANIFEST_FILE`, the path of a manifest file
    ManifestFile,
    /// `RUNFILES_DIR`, the path of a runfiles directory
    Directory,
}

impl RunfilesVar {
    /// Get the variable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManifestFile => "RUNFILES_MANIFEST_FILE",
            Self::Directory => "RUNFILES_DIR",
        }
    }
}

impl std::fmt::Display for RunfilesVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Suffix appended to the program name to probe for a manifest file.
pub const MANIFEST_SUFFIX: &str = ".runfiles_manifest";

/// Suffix appended to the program name to probe for a runfiles directory.
pub const DIRECTORY_SUFFIX: &str = ".runfiles";
