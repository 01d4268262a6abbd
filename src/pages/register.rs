//! Registration page: create an account and sign straight in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::{HOME_PATH, LOGIN_PATH};
use crate::net::types::RegistrationRequest;
use crate::state::context::use_session;
use crate::util::auth::should_leave_login;

const MISSING_FIELDS: &str = "Username, email and password are required.";
const INVALID_EMAIL: &str = "Enter a valid email address.";
const PASSWORD_MISMATCH: &str = "Passwords do not match.";

#[derive(Clone, Debug, Default)]
struct RegistrationForm {
    username: String,
    email: String,
    password: String,
    confirm: String,
    first_name: String,
    last_name: String,
}

fn validate_registration_input(form: &RegistrationForm) -> Result<RegistrationRequest, &'static str> {
    let username = form.username.trim();
    let email = form.email.trim();
    if username.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if !email.contains('@') {
        return Err(INVALID_EMAIL);
    }
    if form.password != form.confirm {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(RegistrationRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        first_name: form.first_name.trim().to_owned(),
        last_name: form.last_name.trim().to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let form = RwSignal::new(RegistrationForm::default());
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
        let request = match validate_registration_input(&form.get()) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                let outcome = store.register(&request).await;
                info.set(outcome.error().unwrap_or_default().to_owned());
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&store, request);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"FinTrack"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="given-name"
                        placeholder="First name"
                        prop:value=move || form.with(|f| f.first_name.clone())
                        on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="family-name"
                        placeholder="Last name"
                        prop:value=move || form.with(|f| f.last_name.clone())
                        on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Confirm password"
                        prop:value=move || form.with(|f| f.confirm.clone())
                        on:input=move |ev| form.update(|f| f.confirm = event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <A href=LOGIN_PATH>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
