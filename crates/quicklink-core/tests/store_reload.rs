//! Reload behavior: what a fresh `MappingStore::open` sees after earlier
//! sessions wrote to (or someone hand-edited) the mappings file.

use quicklink_core::store::DEFAULT_FILE_NAME;
use quicklink_core::token::DEFAULT_TOKEN_PREFIX;
use quicklink_core::{MappingStore, StoreError};
use std::fs;
use std::path::Path;

fn open(path: &Path) -> MappingStore {
    MappingStore::open(path, DEFAULT_TOKEN_PREFIX).unwrap()
}

#[test]
fn list_after_load_matches_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_FILE_NAME);
    fs::write(
        &path,
        "short.ly/3,https://c.example\nshort.ly/1,https://a.example\nshort.ly/2,https://b.example\n",
    )
    .unwrap();

    let store = open(&path);
    assert_eq!(store.list(), ["short.ly/3", "short.ly/1", "short.ly/2"]);
    assert_eq!(store.retrieve("short.ly/1").unwrap(), "https://a.example");
}

#[test]
fn malformed_lines_are_skipped_without_aborting_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_FILE_NAME);
    fs::write(
        &path,
        "no comma at all\n\
         short.ly/1,https://a.example\n\
         \n\
         short.ly/2,https://b.example/?q=1,2\n\
         short.ly/3,https://c.example\r\n",
    )
    .unwrap();

    let store = open(&path);
    assert_eq!(store.list(), ["short.ly/1", "short.ly/3"]);
    assert_eq!(store.retrieve("short.ly/3").unwrap(), "https://c.example");
}

#[test]
fn duplicate_token_lines_last_wins_first_position_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_FILE_NAME);
    fs::write(&path, "t1,https://old.example\nt2,https://b.example\nt1,https://new.example\n").unwrap();

    let store = open(&path);
    assert_eq!(store.list(), ["t1", "t2"]);
    assert_eq!(store.retrieve("t1").unwrap(), "https://new.example");
}

#[test]
fn session_changes_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state").join(DEFAULT_FILE_NAME);

    let mut store = open(&path);
    let keep = store.shorten("https://rust-lang.org").unwrap();
    let gone = store.shorten("https://example.com").unwrap();
    store.delete(&gone).unwrap();
    drop(store);

    let store = open(&path);
    assert_eq!(store.list(), [keep.clone()]);
    assert_eq!(store.retrieve(&keep).unwrap(), "https://rust-lang.org");
    assert!(matches!(
        store.retrieve(&gone),
        Err(StoreError::NotFound { .. })
    ));
}

#[test]
fn delete_keeps_malformed_lines_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_FILE_NAME);
    fs::write(&path, "junk\nshort.ly/97,a\nshort.ly/99162322,hello\n").unwrap();

    let mut store = open(&path);
    store.delete("short.ly/97").unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "junk\nshort.ly/99162322,hello\n"
    );
}

#[test]
fn unreadable_path_is_persistence_error() {
    let dir = tempfile::tempdir().unwrap();
    // Reading a directory as the mappings file fails with something other than NotFound.
    let err = MappingStore::open(dir.path(), DEFAULT_TOKEN_PREFIX).unwrap_err();
    assert!(matches!(err, StoreError::Persistence { action: "read", .. }));
}
