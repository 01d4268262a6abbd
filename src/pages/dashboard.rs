//! Dashboard page: authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside `RequireAuth`, so it reads the user straight from the
//! session context rather than receiving it as a prop. Logging out publishes
//! a signed-out snapshot and the guard handles the redirect.

use leptos::prelude::*;

use crate::state::context::use_session;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let snapshot = session.snapshot;
    let busy = RwSignal::new(false);

    let greeting = move || {
        snapshot.with(|s| {
            s.user
                .as_ref()
                .map(|u| format!("Welcome back, {}", u.display_name()))
                .unwrap_or_default()
        })
    };
    let email = move || snapshot.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());

    let store = session.store;
    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "csr")]
        {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                store.logout().await;
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &store;
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"FinTrack"</h1>
                <div class="dashboard-header__user">
                    <span class="dashboard-header__name">{greeting}</span>
                    <span class="dashboard-header__email">{email}</span>
                    <button class="btn btn--secondary" on:click=on_logout disabled=move || busy.get()>
                        "Log out"
                    </button>
                </div>
            </header>
        </div>
    }
}
