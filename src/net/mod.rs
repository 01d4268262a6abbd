//! Networking modules for the finance REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `credentials` defines the seam the session core depends on, `api` is its
//! HTTP implementation, `error` narrows backend failures, and `types` holds
//! the shared wire schema.

pub mod api;
pub mod credentials;
pub mod error;
pub mod types;
