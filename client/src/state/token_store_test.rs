use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryTokenStore::default();
    assert_eq!(store.load(), None);
}

#[test]
fn memory_store_save_then_load() {
    let store = MemoryTokenStore::default();
    store.save("abc");
    assert_eq!(store.load().as_deref(), Some("abc"));
    store.save("def");
    assert_eq!(store.load().as_deref(), Some("def"));
}

#[test]
fn memory_store_clear_forgets_token() {
    let store = MemoryTokenStore::with_token("abc");
    store.clear();
    assert_eq!(store.load(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_empty_outside_hydrate() {
    let store = BrowserTokenStore;
    store.save("abc");
    assert_eq!(store.load(), None);
    store.clear();
}
