use super::*;

// =============================================================
// MemoryCache
// =============================================================

#[test]
fn memory_cache_starts_empty() {
    let cache = MemoryCache::new();
    assert!(cache.is_empty());
    assert_eq!(cache.get(TOKEN_KEY), None);
}

#[test]
fn memory_cache_set_get_remove() {
    let cache = MemoryCache::new();
    cache.set(TOKEN_KEY, "abc");
    assert_eq!(cache.get(TOKEN_KEY).as_deref(), Some("abc"));
    cache.set(TOKEN_KEY, "def");
    assert_eq!(cache.get(TOKEN_KEY).as_deref(), Some("def"));
    cache.remove(TOKEN_KEY);
    assert_eq!(cache.get(TOKEN_KEY), None);
}

#[test]
fn memory_cache_remove_missing_key_is_noop() {
    let cache = MemoryCache::with_entries([(USER_KEY, "{}")]);
    cache.remove(TOKEN_KEY);
    assert_eq!(cache.len(), 1);
}

#[test]
fn memory_cache_with_entries_seeds_values() {
    let cache = MemoryCache::with_entries([(TOKEN_KEY, "abc"), (USER_KEY, "{}")]);
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get(USER_KEY).as_deref(), Some("{}"));
}

// =============================================================
// LocalStorageCache (native stub)
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_cache_is_empty_outside_browser() {
    let cache = LocalStorageCache;
    cache.set(TOKEN_KEY, "abc");
    assert_eq!(cache.get(TOKEN_KEY), None);
    cache.remove(TOKEN_KEY);
}
