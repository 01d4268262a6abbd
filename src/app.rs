//! Root application component with routing and the session provider.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::require_auth::RequireAuth;
use crate::config::ClientConfig;
use crate::net::api::HttpCredentialService;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::state::context::provide_session;
use crate::state::store::SessionStore;
use crate::util::auth::RouteGuard;
use crate::util::storage::LocalStorageCache;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

/// Root application component.
///
/// Builds the session store, provides it to the tree, and bootstraps it
/// once after mount so guarded routes first observe the loading state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let store = SessionStore::new(
        Arc::new(HttpCredentialService::new(config.api_base_url)),
        Arc::new(LocalStorageCache),
    );
    let session = provide_session(store, RouteGuard::new(LOGIN_PATH));

    let store = session.store;
    Effect::new(move || store.bootstrap());

    view! {
        <Title text="FinTrack"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
