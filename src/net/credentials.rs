//! Credential-service seam between the session core and the network.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` only talks to this trait. The browser build plugs in
//! `HttpCredentialService`; tests plug in scripted mocks.

use async_trait::async_trait;

use super::error::CredentialError;
use super::types::{AuthGrant, RegistrationRequest};

/// Remote authenticate/revoke capability consumed by the session store.
///
/// Futures are `?Send`: browser HTTP futures are bound to the JS event loop.
#[async_trait(?Send)]
pub trait CredentialService: Send + Sync {
    /// Exchange a username/password pair for a token and user record.
    ///
    /// # Errors
    ///
    /// Returns a [`CredentialError`] when the backend rejects the credentials,
    /// the request fails in transit, or the response cannot be decoded.
    async fn authenticate(&self, username: &str, password: &str) -> Result<AuthGrant, CredentialError>;

    /// Invalidate `token` server-side. Callers treat failures as best-effort.
    ///
    /// # Errors
    ///
    /// Returns a [`CredentialError`] when the revoke request fails.
    async fn revoke(&self, token: &str) -> Result<(), CredentialError>;

    /// Create an account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns a [`CredentialError`] when the backend rejects the registration,
    /// the request fails in transit, or the response cannot be decoded.
    async fn register(&self, request: &RegistrationRequest) -> Result<AuthGrant, CredentialError>;
}
