//! Wire types for the auth endpoints and the client-side error
//! taxonomy they map onto.

use serde::{Deserialize, Serialize};

use crate::state::session::UserRecord;

/// Body for `POST /login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /signup`.
#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response payload shared by login and signup. The backend returns
/// either `{token, user}` or `{error}`; every field is optional here
/// so a malformed body still deserializes and can be rejected by the
/// interpretation step instead of panicking.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AuthPayload {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserRecord>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Why an auth action failed, in user-presentable form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The backend explicitly rejected the request (bad credentials,
    /// duplicate account, ...). Carries the backend's message.
    Rejected(String),
    /// Transport-level failure (network down, CORS). Retryable.
    Network,
}

impl AuthError {
    /// Message shown inline next to the form.
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected(msg) => msg,
            Self::Network => "Network error. Please try again.",
        }
    }
}

/// Outcome of a background token verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Backend confirmed the token.
    Valid,
    /// No token stored, or the backend explicitly rejected it.
    Invalid,
    /// Inconclusive (transport failure or unexpected status). The
    /// local session is preserved.
    Unknown,
}
