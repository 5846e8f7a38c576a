use assert_fs::prelude::*;
use pretty_assertions::assert_eq;
use takeout_fs::{FileKind, list_dir, walk_tree};

#[test]
fn test_walk_tree_collects_nested_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("2019/trip/photo.jpg").touch().unwrap();
    temp.child("2019/trip/photo.jpg.supplemental-metadata.json")
        .touch()
        .unwrap();
    temp.child("top.mp4").touch().unwrap();

    let entries = walk_tree(temp.path()).unwrap();

    assert_eq!(entries.len(), 3);
    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert!(names.contains(&"photo.jpg"));
    assert!(names.contains(&"photo.jpg.supplemental-metadata.json"));
    assert!(names.contains(&"top.mp4"));
}

#[test]
fn test_walk_tree_skips_directories() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("album").create_dir_all().unwrap();
    temp.child("album/photo.jpg").touch().unwrap();

    let entries = walk_tree(temp.path()).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "photo.jpg");
}

#[test]
fn test_walk_tree_classification() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("photo.jpg").touch().unwrap();
    temp.child("photo.jpg.supplemental-metadata.json")
        .touch()
        .unwrap();

    let entries = walk_tree(temp.path()).unwrap();
    let sidecars: Vec<_> = entries
        .iter()
        .filter(|e| e.kind() == FileKind::Sidecar)
        .collect();

    assert_eq!(sidecars.len(), 1);
    assert_eq!(sidecars[0].name, "photo.jpg.supplemental-metadata.json");
}

#[test]
fn test_list_dir_sorted_and_local() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("b.jpg").touch().unwrap();
    temp.child("a.jpg").touch().unwrap();
    temp.child("sub/c.jpg").touch().unwrap();

    let entries = list_dir(temp.path()).unwrap();
    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();

    assert_eq!(names, vec!["a.jpg", "b.jpg"]);
}

#[test]
fn test_walk_tree_missing_root_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    let missing = temp.path().join("nope");

    assert!(walk_tree(&missing).is_err());
}
