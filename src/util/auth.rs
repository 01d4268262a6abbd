//! Route-guard decisions for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route applies the same rule set, so the decision is a pure
//! function of the session snapshot. `components::require_auth` turns the
//! decision into rendering and navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos_router::NavigateOptions;

use crate::state::session::SessionSnapshot;

/// What a guarded route should do for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Bootstrap has not finished; render a placeholder, do not navigate.
    ShowPlaceholder,
    /// Not signed in; navigate to `to`, replacing the current history entry
    /// when `replace` is set.
    Redirect { to: String, replace: bool },
    /// Signed in; render the protected children.
    RenderProtected,
}

impl GuardDecision {
    /// Router options for a redirect decision, `None` for the other variants.
    pub fn navigate_options(&self) -> Option<NavigateOptions> {
        match self {
            Self::Redirect { replace, .. } => Some(NavigateOptions { replace: *replace, ..NavigateOptions::default() }),
            Self::ShowPlaceholder | Self::RenderProtected => None,
        }
    }
}

/// Gate for protected content, parameterized by the login entry path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteGuard {
    login_path: String,
}

impl RouteGuard {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self { login_path: login_path.into() }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn evaluate(&self, session: &SessionSnapshot) -> GuardDecision {
        if session.loading {
            GuardDecision::ShowPlaceholder
        } else if !session.is_authenticated() {
            GuardDecision::Redirect { to: self.login_path.clone(), replace: true }
        } else {
            GuardDecision::RenderProtected
        }
    }
}

/// Whether the login page should send the visitor home instead.
pub fn should_leave_login(session: &SessionSnapshot) -> bool {
    !session.loading && session.is_authenticated()
}
