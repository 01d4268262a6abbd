//! Leptos bridge for the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` constructs one `SessionStore` and hands it to `provide_session`,
//! which mirrors store notifications into a signal so components re-render
//! on every session change. Components obtain it through `use_session`.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use crate::util::auth::RouteGuard;

use super::session::SessionSnapshot;
use super::store::SessionStore;

/// Session handle shared through Leptos context.
#[derive(Clone)]
pub struct SessionContext {
    pub store: SessionStore,
    /// Latest published snapshot; updated synchronously by the store.
    pub snapshot: RwSignal<SessionSnapshot>,
    pub guard: RouteGuard,
}

/// Provide `store` to the current owner's subtree.
///
/// The store subscription is released when the owner is cleaned up, so
/// late results from in-flight requests stop touching disposed signals.
pub fn provide_session(store: SessionStore, guard: RouteGuard) -> SessionContext {
    let snapshot = RwSignal::new(store.snapshot());
    let subscription = store.subscribe(move |snap| snapshot.set(snap.clone()));
    on_cleanup(move || drop(subscription));

    let ctx = SessionContext { store, snapshot, guard };
    provide_context(ctx.clone());
    ctx
}

/// Fetch the session context.
///
/// # Panics
///
/// Panics when called outside a subtree set up by [`provide_session`]; that
/// is a wiring bug, not a runtime condition.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
