//! Backend communication: wire types, raw fetch helpers, and the
//! session-aware auth client.

pub mod api;
pub mod auth;
pub mod types;
