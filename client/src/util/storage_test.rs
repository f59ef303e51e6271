use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_read_missing_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.read("admin_token"), Ok(None));
    assert!(!store.contains("admin_token"));
}

#[test]
fn memory_store_write_then_read() {
    let store = MemoryStore::new();
    store.write("k", "v").unwrap();
    assert_eq!(store.read("k"), Ok(Some("v".to_owned())));
    assert!(store.contains("k"));
}

#[test]
fn memory_store_write_replaces_value() {
    let store = MemoryStore::with_entry("k", "old");
    store.write("k", "new").unwrap();
    assert_eq!(store.read("k"), Ok(Some("new".to_owned())));
}

#[test]
fn memory_store_remove_absent_key_succeeds() {
    let store = MemoryStore::new();
    assert_eq!(store.remove("missing"), Ok(()));
}

#[test]
fn memory_store_clones_share_contents() {
    let store = MemoryStore::new();
    let other = store.clone();
    store.write("k", "v").unwrap();
    assert_eq!(other.read("k"), Ok(Some("v".to_owned())));
    other.remove("k").unwrap();
    assert!(!store.contains("k"));
}

// =============================================================
// BrowserStore outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_unavailable_without_hydrate() {
    let store = BrowserStore;
    assert_eq!(store.read("k"), Err(StorageError::Unavailable));
    assert_eq!(store.write("k", "v"), Err(StorageError::Unavailable));
    assert_eq!(store.remove("k"), Err(StorageError::Unavailable));
}

#[test]
fn storage_error_messages() {
    assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
    assert_eq!(StorageError::Write("quota".into()).to_string(), "storage write failed: quota");
}
