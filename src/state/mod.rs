//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` holds the plain snapshot model, `store` owns its lifecycle, and
//! `context` bridges the store into the Leptos component tree.

pub mod context;
pub mod session;
pub mod store;
