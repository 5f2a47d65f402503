//! Top-level pages wired into the router.

pub mod home;
pub mod login;
pub mod plan;
pub mod profile;
