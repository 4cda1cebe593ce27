//! Logical runfile path checks and separator handling

use std::path::{Path, PathBuf};

/// Check whether a logical runfile path is normalized.
///
/// Logical paths are slash-separated and relative to the runfiles root. A
/// normalized path has no `.` or `..` segments and no empty segments. This
/// is purely syntactic and never touches the filesystem.
///
/// ```
/// use runfiles::is_normalized;
///
/// assert!(is_normalized("my_repo/pkg/file.txt"));
/// assert!(!is_normalized("my_repo/../etc/passwd"));
/// assert!(!is_normalized("a//b"));
/// ```
pub fn is_normalized(path: &str) -> bool {
    !(path == "."
        || path == ".."
        || path.starts_with("../")
        || path.contains("/../")
        || path.ends_with("/..")
        || path.starts_with("./")
        || path.ends_with("/.")
        || path.contains("/./")
        || path.contains("//"))
}

/// Whether `path` is rooted with a backslash but carries no drive letter.
///
/// Such paths show up in manifests generated on Windows and must never be
/// treated as relative runfile names.
pub(crate) fn is_unrooted_backslash(path: &str) -> bool {
    path.starts_with('\\')
}

/// Convert a slash-separated path to the platform-native separator.
#[cfg(any(test, not(unix)))]
pub(crate) fn from_slash(path: &str) -> PathBuf {
    use std::path::MAIN_SEPARATOR;

    if MAIN_SEPARATOR == '/' {
        PathBuf::from(path)
    } else {
        PathBuf::from(path.replace('/', &MAIN_SEPARATOR.to_string()))
    }
}

/// Convert a slash-separated path read as raw bytes.
///
/// Unix paths may hold any bytes and are kept exactly. Elsewhere invalid
/// UTF-8 is replaced.
#[cfg(unix)]
pub(crate) fn from_slash_bytes(path: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    PathBuf::from(OsStr::from_bytes(path))
}

#[cfg(not(unix))]
pub(crate) fn from_slash_bytes(path: &[u8]) -> PathBuf {
    from_slash(&String::from_utf8_lossy(path))
}

/// Join a slash-separated relative path onto `base` using native separators.
pub(crate) fn join_slash(base: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(base.to_path_buf(), |acc, segment| acc.join(segment))
}

/// Iterate over the strict ancestors of a logical path, longest first.
///
/// Each item is `(prefix, remainder)` where `prefix/remainder == path`.
pub(crate) fn ancestors(path: &str) -> impl Iterator<Item = (&str, &str)> {
    path.char_indices()
        .rev()
        .filter(|(_, c)| *c == '/')
        .map(move |(idx, _)| (&path[..idx], &path[idx + 1..]))
        .filter(|(prefix, _)| !prefix.is_empty())
}
