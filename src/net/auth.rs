//! Session-aware auth client.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns plain values; nothing here throws across
//! the store boundary. A login/signup response counts as success only
//! if the transport status was OK *and* the payload carries a token —
//! older revisions sniffed message strings, this is the consolidated
//! check. Verification fails open: only an explicit 401 destroys the
//! local session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api;
use super::types::{AuthError, AuthPayload, LoginRequest, SignupRequest, VerifyOutcome};
use crate::state::session::UserRecord;
use crate::state::session_store::SessionStore;

/// Where `logout` sends the browser afterwards.
pub const LOGOUT_REDIRECT: &str = "/";

/// Decide what a login/signup response means.
///
/// Success requires a successful transport status, a non-empty token,
/// and a user record. Anything else is a rejection carrying the
/// backend's error message, or `fallback` when the body offered none.
pub fn interpret_auth_payload(
    transport_ok: bool,
    payload: AuthPayload,
    fallback: &str,
) -> Result<(UserRecord, String), AuthError> {
    let token = payload.token.filter(|t| !t.is_empty());
    match (transport_ok, token, payload.user) {
        (true, Some(token), Some(user)) => Ok((user, token)),
        _ => Err(AuthError::Rejected(
            payload.error.unwrap_or_else(|| fallback.to_owned()),
        )),
    }
}

/// Map a `/verify-token` HTTP status onto an outcome. Only an explicit
/// 401 invalidates; any other non-success status is inconclusive.
pub fn interpret_verify_status(status: u16) -> VerifyOutcome {
    match status {
        200..=299 => VerifyOutcome::Valid,
        401 => VerifyOutcome::Invalid,
        _ => VerifyOutcome::Unknown,
    }
}

/// Issues auth requests and keeps the [`SessionStore`] in sync with
/// their results. Never touches the DOM; the UI re-renders from the
/// session signal.
#[derive(Clone)]
pub struct AuthClient {
    store: SessionStore,
}

impl AuthClient {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Authenticate with email and password. On success the session is
    /// persisted; on any failure the existing session is untouched.
    ///
    /// # Errors
    ///
    /// `AuthError::Rejected` with the backend's message for bad
    /// credentials or a malformed success payload, `AuthError::Network`
    /// for transport failures.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserRecord, AuthError> {
        let req = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = api::post_login(&req).await?;
        let (user, token) = interpret_auth_payload(resp.transport_ok, resp.payload, "Login failed")?;
        self.store.save(&user, &token);
        Ok(user)
    }

    /// Create an account. Same contract as [`Self::login`].
    ///
    /// # Errors
    ///
    /// See [`Self::login`].
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserRecord, AuthError> {
        let req = SignupRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = api::post_signup(&req).await?;
        let (user, token) =
            interpret_auth_payload(resp.transport_ok, resp.payload, "Signup failed")?;
        self.store.save(&user, &token);
        Ok(user)
    }

    /// Check the stored token against the backend.
    ///
    /// No token: `Invalid`, no network call. Explicit 401: `Invalid`
    /// and the session is cleared. Any other failure: `Unknown`, the
    /// local session is preserved across transient network/CORS
    /// trouble rather than forcing a logout.
    pub async fn verify(&self) -> VerifyOutcome {
        let Some(token) = self.store.token() else {
            return VerifyOutcome::Invalid;
        };

        match api::get_verify_token(&token).await {
            Ok(status) => {
                let outcome = interpret_verify_status(status);
                if outcome == VerifyOutcome::Invalid {
                    self.store.clear();
                } else if outcome == VerifyOutcome::Unknown {
                    leptos::logging::warn!("token verification returned status {status}; keeping local session");
                }
                outcome
            }
            Err(_) => {
                leptos::logging::warn!("token verification unreachable; keeping local session");
                VerifyOutcome::Unknown
            }
        }
    }

    /// Drop the session (primary and legacy keys) and hand back the
    /// landing-page path for the caller to navigate to.
    pub fn logout(&self) -> &'static str {
        self.store.clear();
        LOGOUT_REDIRECT
    }
}
