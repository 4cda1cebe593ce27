//! Manifest-backed runfiles lookup
//!
//! A manifest is a text file with one entry per line:
//!
//! ```text
//! my_repo/pkg/data.txt /abs/path/to/data.txt
//! my_repo/pkg/empty_init.py
//! my_repo/pkg/testdata /abs/path/to/testdata
//! ```
//!
//! Each line is split on its first space into a logical path and a physical
//! path. There is no escaping, so physical paths keep any leading spaces
//! after the separator. An empty (or whitespace-only) physical column marks
//! an empty runfile that is intentionally absent from the filesystem. An
//! entry may also stand for a whole directory, in which case every logical
//! path below it resolves into that directory.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::backend::Backend;
use crate::error::{Error, ResolveError, Result};
use crate::path::{ancestors, from_slash_bytes, join_slash};

/// Lookup table loaded from a runfiles manifest.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    file: PathBuf,
    /// `None` marks an empty runfile.
    entries: HashMap<String, Option<PathBuf>>,
}

impl Manifest {
    /// Load a manifest from a file.
    pub fn from_file(file: impl AsRef<Path>) -> Result<Self> {
        let file = file.as_ref();
        let handle = File::open(file).map_err(|e| Error::io(file, e))?;
        Self::from_reader(file, handle)
    }

    /// Parse a manifest from any reader.
    ///
    /// `file` is only used to label errors and to answer [`Manifest::file`].
    pub fn from_reader(file: impl Into<PathBuf>, reader: impl Read) -> Result<Self> {
        let file = file.into();
        let mut reader = BufReader::new(reader);
        let mut entries = HashMap::new();
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| Error::io(&file, e))?;
            if read == 0 {
                break;
            }
            line_number += 1;

            let line = strip_line_ending(&buf);
            let Some((logical, physical)) = split_entry(line) else {
                return Err(Error::MalformedManifest {
                    file,
                    line_number,
                    line: String::from_utf8_lossy(line).into_owned(),
                });
            };

            let physical = if physical.iter().all(u8::is_ascii_whitespace) {
                None
            } else {
                Some(from_slash_bytes(physical))
            };
            // Later duplicates win.
            entries.insert(logical.to_string(), physical);
        }

        tracing::debug!(
            manifest = %file.display(),
            entries = entries.len(),
            "Loaded runfiles manifest"
        );

        Ok(Self { file, entries })
    }

    /// Path of the manifest file this table was loaded from.
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw entry for `logical`.
    ///
    /// Returns `Some(None)` for an empty-runfile entry and `None` when the
    /// manifest has no such line. Directory entries are not expanded.
    pub fn get(&self, logical: &str) -> Option<Option<&Path>> {
        self.entries.get(logical).map(|p| p.as_deref())
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Split a line on its first space. The logical column must be non-empty
/// UTF-8; the physical column is left as bytes.
fn split_entry(line: &[u8]) -> Option<(&str, &[u8])> {
    let idx = line.iter().position(|&b| b == b' ')?;
    let logical = std::str::from_utf8(&line[..idx]).ok()?;
    (!logical.is_empty()).then_some((logical, &line[idx + 1..]))
}

impl Backend for Manifest {
    fn resolve(&self, logical: &str) -> std::result::Result<PathBuf, ResolveError> {
        match self.entries.get(logical) {
            Some(Some(physical)) => return Ok(physical.clone()),
            Some(None) => return Err(ResolveError::Empty),
            None => {}
        }

        // A runfile below a directory entry is not listed on its own line.
        for (prefix, remainder) in ancestors(logical) {
            if let Some(Some(dir)) = self.entries.get(prefix) {
                return Ok(join_slash(dir, remainder));
            }
        }

        Err(ResolveError::NotFound)
    }
}
