use super::*;
use std::sync::Arc;

use crate::net::api::HttpCredentialService;
use crate::util::storage::MemoryCache;

fn store() -> SessionStore {
    SessionStore::new(Arc::new(HttpCredentialService::new("/api")), Arc::new(MemoryCache::new()))
}

#[test]
fn provide_session_mirrors_store_into_signal() {
    let store = store();
    let owner = Owner::new();
    owner.with(|| {
        let ctx = provide_session(store.clone(), RouteGuard::new("/login"));
        assert!(ctx.snapshot.get_untracked().loading);

        store.bootstrap();

        assert!(!ctx.snapshot.get_untracked().loading);
        assert_eq!(use_session().guard.login_path(), "/login");
    });
}

#[test]
fn owner_cleanup_releases_subscription() {
    let store = store();
    let owner = Owner::new();
    owner.with(|| {
        let _ctx = provide_session(store.clone(), RouteGuard::new("/login"));
    });
    assert_eq!(store.observer_count(), 1);

    owner.cleanup();

    assert_eq!(store.observer_count(), 0);
}

#[test]
#[should_panic]
fn use_session_outside_provider_panics() {
    let owner = Owner::new();
    owner.with(|| {
        let _ = use_session();
    });
}
