use super::*;
use crate::test_support::DirGuard;
use serial_test::serial;
use std::collections::BTreeMap;
use tempfile::TempDir;

fn resolver() -> StandardResolver {
    StandardResolver::new("/work/project")
}

#[test]
fn relative_text_joins_the_base() {
    let path = resolver()
        .resolve_single(&RawValue::Text("src/main.rs".to_string()))
        .unwrap();
    assert_eq!(path, PathBuf::from("/work/project/src/main.rs"));
}

#[test]
fn absolute_values_pass_through() {
    let path = resolver()
        .resolve_single(&RawValue::Path(PathBuf::from("/etc/hosts")))
        .unwrap();
    assert_eq!(path, PathBuf::from("/etc/hosts"));
}

#[test]
fn empty_text_is_a_notation_error() {
    let result = resolver().resolve_single(&RawValue::Text("   ".to_string()));
    assert!(matches!(result, Err(ResolveError::Notation(_))));
}

#[test]
fn single_resolution_rejects_aggregate_values() {
    let r = resolver();

    let collection = RawValue::Collection(vec![RawValue::Text("a".to_string())]);
    assert!(matches!(
        r.resolve_single(&collection),
        Err(ResolveError::Notation(_))
    ));

    let map = RawValue::Map(BTreeMap::new());
    assert!(matches!(
        r.resolve_single(&map),
        Err(ResolveError::Notation(_))
    ));

    let tree = RawValue::Tree(FileTree::new("/work/out"));
    assert!(matches!(
        r.resolve_single(&tree),
        Err(ResolveError::Notation(_))
    ));
}

#[test]
fn many_resolution_flattens_nested_collections() {
    let value = RawValue::Collection(vec![
        RawValue::Text("a.txt".to_string()),
        RawValue::Collection(vec![
            RawValue::Text("b.txt".to_string()),
            RawValue::Path(PathBuf::from("/abs/c.txt")),
        ]),
    ]);

    let paths = resolver().resolve_many(&value).unwrap();
    assert_eq!(
        paths,
        vec![
            PathBuf::from("/work/project/a.txt"),
            PathBuf::from("/work/project/b.txt"),
            PathBuf::from("/abs/c.txt"),
        ]
    );
}

#[test]
fn many_resolution_takes_map_values_in_iteration_order() {
    let mut entries = BTreeMap::new();
    entries.insert("reports".to_string(), RawValue::Text("out/reports".to_string()));
    entries.insert("classes".to_string(), RawValue::Text("out/classes".to_string()));
    let value = RawValue::Map(entries);

    // BTreeMap iterates in key order: classes before reports.
    let paths = resolver().resolve_many(&value).unwrap();
    assert_eq!(
        paths,
        vec![
            PathBuf::from("/work/project/out/classes"),
            PathBuf::from("/work/project/out/reports"),
        ]
    );
}

#[test]
fn many_resolution_uses_the_tree_root() {
    let value = RawValue::Tree(FileTree::new("generated"));
    let paths = resolver().resolve_many(&value).unwrap();
    assert_eq!(paths, vec![PathBuf::from("/work/project/generated")]);
}

#[test]
fn single_value_resolves_to_a_one_element_sequence() {
    let paths = resolver()
        .resolve_many(&RawValue::Text("a.txt".to_string()))
        .unwrap();
    assert_eq!(paths, vec![PathBuf::from("/work/project/a.txt")]);
}

#[test]
fn resolution_is_idempotent() {
    let value = RawValue::Collection(vec![
        RawValue::Text("one".to_string()),
        RawValue::Text("two".to_string()),
    ]);
    let r = resolver();

    let first = r.resolve_many(&value).unwrap();
    let second = r.resolve_many(&value).unwrap();
    assert_eq!(first, second);
}

#[test]
fn raw_values_render_for_diagnostics() {
    let mut entries = BTreeMap::new();
    entries.insert("out".to_string(), RawValue::Text("build/out".to_string()));

    assert_eq!(RawValue::Text("src".to_string()).to_string(), "src");
    assert_eq!(
        RawValue::Collection(vec![
            RawValue::Text("a".to_string()),
            RawValue::Text("b".to_string())
        ])
        .to_string(),
        "[a, b]"
    );
    assert_eq!(RawValue::Map(entries).to_string(), "{out: build/out}");
    assert_eq!(
        RawValue::Tree(FileTree::new("/work/gen")).to_string(),
        "file tree '/work/gen'"
    );
}

#[test]
#[serial]
fn from_current_dir_anchors_at_the_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    let _guard = DirGuard::new(temp_dir.path());

    let r = StandardResolver::from_current_dir().unwrap();
    let resolved = r
        .resolve_single(&RawValue::Text("out.txt".to_string()))
        .unwrap();

    assert_eq!(
        resolved.parent().unwrap().canonicalize().unwrap(),
        temp_dir.path().canonicalize().unwrap()
    );
}
