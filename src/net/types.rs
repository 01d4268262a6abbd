//! Wire DTOs shared between the session core and the REST backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON so the persisted `user` cache entry
//! and the login response deserialize into the same type.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Identity of the signed-in principal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Backend user identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Contact email address.
    pub email: String,
    /// Given name (may be empty).
    #[serde(default)]
    pub first_name: String,
    /// Family name (may be empty).
    #[serde(default)]
    pub last_name: String,
}

impl UserRecord {
    /// Human-facing name: `"first last"`, or the username when both are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.username.clone() } else { full.to_owned() }
    }
}

/// Successful authentication payload: bearer token plus the user it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthGrant {
    pub token: String,
    pub user: UserRecord,
}

/// Body of `POST /auth/login/`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of `POST /auth/register/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}
