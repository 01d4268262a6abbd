//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; guarded pages are wrapped in
//! `components::require_auth::RequireAuth` by the router in `app`.

pub mod dashboard;
pub mod login;
pub mod register;
