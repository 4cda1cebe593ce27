use proptest::prelude::*;
use runfiles::{Directory, Runfiles, is_normalized};

fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{1,8}".prop_filter("plain segment", |s| s != "." && s != "..")
}

proptest! {
    #[test]
    fn test_plain_segments_are_normalized(segments in prop::collection::vec(segment(), 1..6)) {
        let path = segments.join("/");
        prop_assert!(is_normalized(&path));
    }

    #[test]
    fn test_dot_segment_anywhere_is_rejected(
        before in prop::collection::vec(segment(), 0..4),
        after in prop::collection::vec(segment(), 0..4),
        dot in prop::sample::select(vec![".", ".."]),
    ) {
        let mut segments = before;
        segments.push(dot.to_string());
        segments.extend(after);
        let path = segments.join("/");
        prop_assert!(!is_normalized(&path));
    }

    #[test]
    fn test_empty_segment_is_rejected(
        before in prop::collection::vec(segment(), 1..4),
        after in prop::collection::vec(segment(), 1..4),
    ) {
        let path = format!("{}//{}", before.join("/"), after.join("/"));
        prop_assert!(!is_normalized(&path));
    }

    #[test]
    fn test_directory_lookup_stays_below_root(segments in prop::collection::vec(segment(), 1..6)) {
        let root = std::env::temp_dir().join("runfiles-root");
        let runfiles: Runfiles = Directory::new(&root).into();
        let resolved = runfiles.path(&segments.join("/")).unwrap();
        prop_assert!(resolved.starts_with(&root));
    }
}
