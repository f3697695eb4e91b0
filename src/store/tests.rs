use super::*;

use tempfile::tempdir;

fn exercise_store(store: &dyn Store) {
    assert!(!store.exists("greeting.txt"));
    store.put("greeting.txt", "hello").unwrap();
    store.put("aardvark.txt", "first").unwrap();

    assert!(store.exists("greeting.txt"));
    assert_eq!(store.get("greeting.txt").unwrap(), "hello");

    // Overwrite is silent
    store.put("greeting.txt", "replaced").unwrap();
    assert_eq!(store.get("greeting.txt").unwrap(), "replaced");

    let keys = store.list().unwrap();
    assert_eq!(keys, vec!["aardvark.txt", "greeting.txt"]);

    match store.get("absent.txt") {
        Err(StoreError::KeyNotFound(key)) => assert_eq!(key, "absent.txt"),
        other => panic!("expected KeyNotFound, got {other:?}"),
    }
}

#[test]
fn test_dir_store_roundtrip() {
    let dir = tempdir().unwrap();
    let store = DirStore::create(dir.path().join("out")).unwrap();
    exercise_store(&store);
}

#[test]
fn test_mem_store_roundtrip() {
    exercise_store(&MemStore::new());
}

#[test]
fn test_dir_store_create_is_idempotent() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("nested").join("out");

    let store = DirStore::create(&root).unwrap();
    store.put("a.txt", "a").unwrap();

    // Second create over the same directory keeps existing entries
    let reopened = DirStore::create(&root).unwrap();
    assert_eq!(reopened.get("a.txt").unwrap(), "a");
}

#[test]
fn test_dir_store_open_missing_directory_reads_as_missing_keys() {
    let dir = tempdir().unwrap();
    let store = DirStore::open(dir.path().join("never-created"));

    assert!(!store.exists("anything"));
    assert!(matches!(
        store.get("anything"),
        Err(StoreError::KeyNotFound(_))
    ));
}

#[test]
fn test_mem_store_remove() {
    let store = MemStore::new();
    store.put("k", "v").unwrap();
    store.remove("k");
    assert!(!store.exists("k"));
}

#[test]
fn test_stable_key_names() {
    assert_eq!(chunk_key(0), "chunk-0.txt");
    assert_eq!(chunk_key(12), "chunk-12.txt");
    assert_eq!(METADATA_KEY, "chunks-metadata.json");
    assert_eq!(USAGE_KEY, "token-usage.json");
}
