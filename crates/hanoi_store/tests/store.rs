use std::fs;

use hanoi_store::{PersistError, StateStore};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn prepare_creates_missing_state_dir() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("nested").join("state");
    let store = StateStore::new(&dir);

    store.prepare().unwrap();
    assert!(dir.is_dir());
    // Preparing leaves nothing behind in the directory.
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    store.prepare().unwrap();
}

#[test]
fn file_in_place_of_state_dir_names_the_path() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let err = StateStore::new(&file_path).prepare().unwrap_err();
    assert!(matches!(&err, PersistError::NotADirectory { path } if *path == file_path));
    assert!(err.to_string().contains("not_a_dir"));
}

#[test]
fn write_replaces_existing_file_without_leftovers() {
    let temp = TempDir::new().unwrap();
    let store = StateStore::new(temp.path());

    let first = store.write("preferences.ron", "first").unwrap();
    assert_eq!(first, store.path("preferences.ron"));
    assert_eq!(fs::read_to_string(&first).unwrap(), "first");

    let second = store.write("preferences.ron", "second").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "second");

    let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn failed_write_leaves_no_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let store = StateStore::new(&file_path);
    assert!(matches!(
        store.write("preferences.ron", "data"),
        Err(PersistError::NotADirectory { .. })
    ));
    assert!(!temp.path().join("preferences.ron").exists());
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "x");
}

#[test]
fn store_reads_back_what_it_wrote() {
    let temp = TempDir::new().unwrap();
    let store = StateStore::new(temp.path().join("state"));

    assert_eq!(store.read("preferences.ron").unwrap(), None);

    store.write("preferences.ron", "(disk_count: 5)").unwrap();
    assert_eq!(
        store.read("preferences.ron").unwrap().as_deref(),
        Some("(disk_count: 5)")
    );
    assert_eq!(store.dir(), temp.path().join("state"));
}

#[test]
fn unreadable_entry_reports_its_path() {
    let temp = TempDir::new().unwrap();
    let store = StateStore::new(temp.path());
    fs::create_dir(store.path("preferences.ron")).unwrap();

    let err = store.read("preferences.ron").unwrap_err();
    assert!(matches!(&err, PersistError::Read { path, .. } if *path == store.path("preferences.ron")));
}
