//! Directory-backed lookups

use pretty_assertions::assert_eq;
use runfiles::{Options, Runfiles};
use runfiles_test_utils::TestRunfiles;

#[test]
fn test_directory_option_resolves_into_tree() {
    let fixture = TestRunfiles::new();
    let tree = fixture.write_tree("bin.runfiles", &[("repo/pkg/test.txt", "hi!")]);

    let runfiles = Runfiles::new(Options::new().directory(&tree)).unwrap();
    let path = runfiles.path("repo/pkg/test.txt").unwrap();

    assert_eq!(path, tree.join("repo").join("pkg").join("test.txt"));
    assert_eq!(std::fs::read_to_string(path).unwrap(), "hi!");
}

#[test]
fn test_directory_lookup_does_not_require_existence() {
    let fixture = TestRunfiles::new();
    let tree = fixture.create_dir("bin.runfiles");

    let runfiles = Runfiles::new(Options::new().directory(&tree)).unwrap();

    assert_eq!(runfiles.path("repo/missing").unwrap(), tree.join("repo").join("missing"));
}

#[test]
fn test_directory_option_exports_runfiles_dir() {
    let fixture = TestRunfiles::new();
    let tree = fixture.create_dir("bin.runfiles");

    let runfiles = Runfiles::new(Options::new().directory(&tree)).unwrap();

    assert_eq!(runfiles.env(), vec![format!("RUNFILES_DIR={}", tree.display())]);
}
