//! Reusable UI components shared across pages.

pub mod require_auth;
