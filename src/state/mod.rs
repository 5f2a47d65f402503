//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components can depend on
//! small focused models: `session` holds the logged-in/logged-out
//! model and its render view, `session_store` owns persistence.

pub mod session;
pub mod session_store;
