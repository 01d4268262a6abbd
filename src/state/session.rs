//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Snapshots of this state are what route guards and user-aware components
//! observe. Only `SessionStore` produces them.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserRecord;

/// Read-only view of the authentication state at one point in time.
///
/// `user` and `token` are always both present or both absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub user: Option<UserRecord>,
    pub token: Option<String>,
    /// True only until the startup bootstrap has run.
    pub loading: bool,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self { user: None, token: None, loading: true }
    }
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub(crate) fn sign_in(&mut self, token: String, user: UserRecord) {
        self.token = Some(token);
        self.user = Some(user);
    }

    pub(crate) fn sign_out(&mut self) {
        self.token = None;
        self.user = None;
    }
}

/// Result of a login or registration attempt. Failures never escape as errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    Failure { error: String },
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Failure { error } => Some(error),
        }
    }
}
