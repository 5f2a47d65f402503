//! Reusable UI components shared across pages.

pub mod nav_auth;
pub mod trip_summary;
