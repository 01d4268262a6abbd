//! Login page: username + password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Success needs no explicit navigation: the store publishes
//! the signed-in snapshot and the redirect effect below sends the user home.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::{HOME_PATH, REGISTER_PATH};
use crate::state::context::use_session;
use crate::util::auth::should_leave_login;

const MISSING_CREDENTIALS: &str = "Enter both username and password.";

fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let snapshot = session.snapshot;
    Effect::new(move || {
        if should_leave_login(&snapshot.get()) {
            navigate(HOME_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let store = session.store;
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) = match validate_login_input(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                let outcome = store.login(&username_value, &password_value).await;
                info.set(outcome.error().unwrap_or_default().to_owned());
                password.set(String::new());
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&store, username_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"FinTrack"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "No account yet? "
                    <A href=REGISTER_PATH>"Create one"</A>
                </p>
            </div>
        </div>
    }
}
