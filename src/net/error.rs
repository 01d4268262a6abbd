//! Credential-service failure type and error-payload parsing.
//!
//! ERROR HANDLING
//! ==============
//! Backend failures arrive as arbitrary JSON. They are narrowed here, at the
//! HTTP boundary, into a tagged enum with an explicit optional message so the
//! session core never inspects raw payloads.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Failure reported by a [`CredentialService`](super::credentials::CredentialService).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    /// The backend answered and refused the request (bad credentials, validation).
    #[error("credentials rejected (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a body that could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl CredentialError {
    /// Build a rejection from a raw error body, extracting its message if any.
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| extract_error_message(&v));
        Self::Rejected { status, message }
    }

    /// Human-readable message suitable for the UI, when the failure carried one.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

/// Pull a display message out of a backend error payload.
///
/// Checks `detail`, `error`, `message`, then `non_field_errors[0]`, then the
/// first string of the first field-error array.
pub fn extract_error_message(payload: &Value) -> Option<String> {
    let obj = payload.as_object()?;
    for key in ["detail", "error", "message"] {
        if let Some(text) = obj.get(key).and_then(non_empty_str) {
            return Some(text.to_owned());
        }
    }
    if let Some(text) = obj.get("non_field_errors").and_then(first_str) {
        return Some(text.to_owned());
    }
    obj.iter().find_map(|(field, value)| {
        first_str(value).map(|text| format!("{field}: {text}"))
    })
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty())
}

fn first_str(value: &Value) -> Option<&str> {
    value.as_array()?.iter().find_map(non_empty_str)
}
