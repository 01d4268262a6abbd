//! Guard wrapper for routes that need a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a route's view. Re-evaluates the route guard on every session
//! change: a placeholder while bootstrap runs, a history-replacing redirect
//! to the login page when signed out, the children otherwise.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::context::use_session;
use crate::util::auth::GuardDecision;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let guard = session.guard.clone();
    let snapshot = session.snapshot;
    let decision = Memo::new(move |_| guard.evaluate(&snapshot.get()));

    Effect::new(move || {
        let current = decision.get();
        if let (GuardDecision::Redirect { to, .. }, Some(options)) = (&current, current.navigate_options()) {
            navigate(to, options);
        }
    });

    move || match decision.get() {
        GuardDecision::ShowPlaceholder => view! {
            <div class="route-placeholder" aria-busy="true">"Loading..."</div>
        }
        .into_any(),
        GuardDecision::Redirect { .. } => ().into_any(),
        GuardDecision::RenderProtected => children().into_any(),
    }
}
