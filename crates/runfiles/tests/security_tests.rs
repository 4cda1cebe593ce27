//! Malformed logical paths are rejected before any backend is consulted.

use rstest::rstest;
use runfiles::{Directory, Error, Manifest, Runfiles, is_normalized};

fn backends() -> Vec<Runfiles> {
    let manifest = Manifest::from_reader("MANIFEST", "a /x\n".as_bytes()).unwrap();
    vec![manifest.into(), Directory::new("/runfiles").into()]
}

#[rstest]
#[case("../a")]
#[case("../../etc/passwd")]
#[case("a/../b")]
#[case("a/b/..")]
#[case("..")]
#[case("/..")]
#[case("./a")]
#[case("a/.")]
#[case("a/./b")]
#[case(".")]
#[case("a//b")]
fn test_traversal_rejected_for_every_backend(#[case] logical: &str) {
    for runfiles in backends() {
        let result = runfiles.path(logical);
        assert!(
            matches!(result, Err(Error::NotNormalized { .. })),
            "{logical:?} should be rejected as not normalized, got {result:?}"
        );
    }
}

#[test]
fn test_empty_path_rejected() {
    for runfiles in backends() {
        assert!(matches!(runfiles.path(""), Err(Error::EmptyPath)));
    }
}

#[rstest]
#[case("\\a")]
#[case("\\\\server\\share")]
fn test_backslash_rooted_rejected(#[case] logical: &str) {
    for runfiles in backends() {
        assert!(matches!(
            runfiles.path(logical),
            Err(Error::NoDriveLetter { .. })
        ));
    }
}

#[rstest]
#[case("a..b")]
#[case("..a/b")]
#[case("a/.hidden")]
#[case("a/..b/c")]
#[case("a/b.")]
fn test_dotted_names_are_not_traversal(#[case] logical: &str) {
    assert!(is_normalized(logical), "{logical:?} is a plain name");
}

#[test]
fn test_error_message_quotes_path() {
    let runfiles: Runfiles = Directory::new("/runfiles").into();
    let err = runfiles.path("a/../b").unwrap_err();
    assert_eq!(err.to_string(), "runfiles: path \"a/../b\" is not normalized");
}
