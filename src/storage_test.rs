use super::*;

// =============================================================================
// NoopStorage
// =============================================================================

#[test]
fn noop_get_finds_nothing_after_set() {
    let storage = NoopStorage;
    storage.set("k", "v");
    assert_eq!(storage.get("k"), None);
}

#[test]
fn noop_remove_does_not_panic() {
    NoopStorage.remove("k");
}

// =============================================================================
// MemoryStorage
// =============================================================================

#[test]
fn memory_get_missing_returns_none() {
    let storage = MemoryStorage::default();
    assert_eq!(storage.get("absent"), None);
}

#[test]
fn memory_set_then_get() {
    let storage = MemoryStorage::default();
    storage.set("k", "v");
    assert_eq!(storage.get("k"), Some("v".to_owned()));
}

#[test]
fn memory_set_overwrites() {
    let storage = MemoryStorage::default();
    storage.set("k", "first");
    storage.set("k", "second");
    assert_eq!(storage.get("k"), Some("second".to_owned()));
}

#[test]
fn memory_remove_deletes_key() {
    let storage = MemoryStorage::default();
    storage.set("k", "v");
    storage.remove("k");
    assert_eq!(storage.get("k"), None);
}

#[test]
fn memory_remove_missing_is_noop() {
    MemoryStorage::default().remove("absent");
}

// =============================================================================
// FileStorage
// =============================================================================

#[test]
fn file_set_then_get() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::new(dir.path());
    storage.set("cinema_token", "tok");
    assert_eq!(storage.get("cinema_token"), Some("tok".to_owned()));
}

#[test]
fn file_get_missing_returns_none() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::new(dir.path());
    assert_eq!(storage.get("absent"), None);
}

#[test]
fn file_set_overwrites() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::new(dir.path());
    storage.set("k", "first");
    storage.set("k", "second");
    assert_eq!(storage.get("k"), Some("second".to_owned()));
}

#[test]
fn file_remove_deletes_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::new(dir.path());
    storage.set("k", "v");
    storage.remove("k");
    assert_eq!(storage.get("k"), None);
}

#[test]
fn file_remove_missing_is_noop() {
    let dir = tempfile::tempdir().expect("tempdir");
    FileStorage::new(dir.path()).remove("absent");
}

#[test]
fn file_values_visible_to_fresh_instance_over_same_root() {
    let dir = tempfile::tempdir().expect("tempdir");
    FileStorage::new(dir.path()).set("k", "persisted");
    let reopened = FileStorage::new(dir.path());
    assert_eq!(reopened.get("k"), Some("persisted".to_owned()));
}

#[test]
fn file_root_created_lazily_on_first_write() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("state").join("session");
    let storage = FileStorage::new(&nested);
    assert_eq!(storage.get("k"), None);
    storage.set("k", "v");
    assert_eq!(storage.get("k"), Some("v".to_owned()));
}
