//! REST implementation of the credential service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning a transport error since these endpoints
//! are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `CredentialError::Rejected` with whatever message
//! the body carries; send and decode failures map to `Transport`/`Decode`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::credentials::CredentialService;
use super::error::CredentialError;
use super::types::{AuthGrant, RegistrationRequest};

fn login_endpoint(base_url: &str) -> String {
    format!("{base_url}/auth/login/")
}

fn logout_endpoint(base_url: &str) -> String {
    format!("{base_url}/auth/logout/")
}

fn register_endpoint(base_url: &str) -> String {
    format!("{base_url}/auth/register/")
}

fn token_header_value(token: &str) -> String {
    format!("Token {token}")
}

/// Credential service backed by the finance API's `/auth/*` endpoints.
#[derive(Clone, Debug)]
pub struct HttpCredentialService {
    base_url: String,
}

impl HttpCredentialService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(feature = "csr")]
async fn read_grant(resp: gloo_net::http::Response) -> Result<AuthGrant, CredentialError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(CredentialError::rejected(status, &body));
    }
    resp.json::<AuthGrant>()
        .await
        .map_err(|e| CredentialError::Decode(e.to_string()))
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> CredentialError {
    CredentialError::Transport("not available outside the browser".to_owned())
}

#[async_trait(?Send)]
impl CredentialService for HttpCredentialService {
    async fn authenticate(&self, username: &str, password: &str) -> Result<AuthGrant, CredentialError> {
        #[cfg(feature = "csr")]
        {
            let body = super::types::LoginRequest { username, password };
            let resp = gloo_net::http::Request::post(&login_endpoint(&self.base_url))
                .json(&body)
                .map_err(|e| CredentialError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| CredentialError::Transport(e.to_string()))?;
            read_grant(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (username, password, login_endpoint(&self.base_url));
            Err(unavailable())
        }
    }

    async fn revoke(&self, token: &str) -> Result<(), CredentialError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&logout_endpoint(&self.base_url))
                .header("Authorization", &token_header_value(token))
                .send()
                .await
                .map_err(|e| CredentialError::Transport(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(CredentialError::rejected(status, &body));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token_header_value(token), logout_endpoint(&self.base_url));
            Err(unavailable())
        }
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<AuthGrant, CredentialError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&register_endpoint(&self.base_url))
                .json(request)
                .map_err(|e| CredentialError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| CredentialError::Transport(e.to_string()))?;
            read_grant(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, register_endpoint(&self.base_url));
            Err(unavailable())
        }
    }
}
