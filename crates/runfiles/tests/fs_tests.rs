//! Read-only file access through `Runfiles`

use pretty_assertions::assert_eq;
use runfiles::{Error, Options, Runfiles};
use runfiles_test_utils::TestRunfiles;
use std::io::Read;

fn fixture_runfiles(fixture: &TestRunfiles) -> Runfiles {
    let data = fixture.write_file("real/data.txt", "hi!\n");
    let dir = fixture.write_tree("real/testdata", &[("nested/inner.txt", "inner")]);
    let manifest = fixture.write_manifest(&[
        ("repo/data.txt", data.to_str().unwrap()),
        ("repo/testdata", dir.to_str().unwrap()),
        ("repo/__init__.py", ""),
        ("repo/missing.txt", "/no/such/file"),
    ]);
    Runfiles::new(Options::new().manifest_file(manifest)).unwrap()
}

#[test]
fn test_read_to_string() {
    let fixture = TestRunfiles::new();
    let runfiles = fixture_runfiles(&fixture);

    assert_eq!(runfiles.read_to_string("repo/data.txt").unwrap(), "hi!\n");
    assert_eq!(runfiles.read("repo/data.txt").unwrap(), b"hi!\n".to_vec());
}

#[test]
fn test_read_through_directory_entry() {
    let fixture = TestRunfiles::new();
    let runfiles = fixture_runfiles(&fixture);

    assert_eq!(
        runfiles.read_to_string("repo/testdata/nested/inner.txt").unwrap(),
        "inner"
    );
    assert!(runfiles.metadata("repo/testdata/nested").unwrap().is_dir());
}

#[test]
fn test_empty_runfile_reads_as_empty() {
    let fixture = TestRunfiles::new();
    let runfiles = fixture_runfiles(&fixture);

    assert_eq!(runfiles.read_to_string("repo/__init__.py").unwrap(), "");
    assert!(runfiles.read("repo/__init__.py").unwrap().is_empty());
}

#[test]
fn test_open_empty_runfile_reports_sentinel() {
    let fixture = TestRunfiles::new();
    let runfiles = fixture_runfiles(&fixture);

    let err = runfiles.open("repo/__init__.py").unwrap_err();
    assert!(err.is_empty_runfile());
    assert!(runfiles.metadata("repo/__init__.py").unwrap_err().is_empty_runfile());
}

#[test]
fn test_open_reads_contents() {
    let fixture = TestRunfiles::new();
    let runfiles = fixture_runfiles(&fixture);

    let mut content = String::new();
    runfiles
        .open("repo/data.txt")
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    assert_eq!(content, "hi!\n");
}

#[test]
fn test_missing_physical_file_is_io_error() {
    let fixture = TestRunfiles::new();
    let runfiles = fixture_runfiles(&fixture);

    match runfiles.read("repo/missing.txt") {
        Err(Error::Io { path, source }) => {
            assert!(path.ends_with("file"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_unknown_runfile_is_not_read() {
    let fixture = TestRunfiles::new();
    let runfiles = fixture_runfiles(&fixture);

    assert!(runfiles.read_to_string("repo/unknown").unwrap_err().is_not_found());
}
