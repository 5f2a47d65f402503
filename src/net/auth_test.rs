use super::*;
use crate::state::session::Session;
use crate::state::session_store::{MemoryStorage, SessionStore};
use futures::executor::block_on;

fn payload(token: Option<&str>, user_name: Option<&str>, error: Option<&str>) -> AuthPayload {
    AuthPayload {
        token: token.map(str::to_owned),
        user: user_name.map(|name| UserRecord {
            name: name.to_owned(),
            email: "a@b.com".to_owned(),
            extra: std::collections::BTreeMap::new(),
        }),
        error: error.map(str::to_owned),
    }
}

// =============================================================
// Login/signup response interpretation
// =============================================================

#[test]
fn ok_response_with_token_and_user_succeeds() {
    let result = interpret_auth_payload(true, payload(Some("tok"), Some("Asha"), None), "Login failed");
    let (user, token) = result.unwrap();
    assert_eq!(user.name, "Asha");
    assert_eq!(token, "tok");
}

#[test]
fn ok_response_without_token_is_rejected() {
    let result = interpret_auth_payload(true, payload(None, Some("Asha"), None), "Login failed");
    assert_eq!(result, Err(AuthError::Rejected("Login failed".to_owned())));
}

#[test]
fn ok_response_with_empty_token_is_rejected() {
    let result = interpret_auth_payload(true, payload(Some(""), Some("Asha"), None), "Login failed");
    assert!(result.is_err());
}

#[test]
fn ok_response_without_user_is_rejected() {
    let result = interpret_auth_payload(true, payload(Some("tok"), None, None), "Login failed");
    assert!(result.is_err());
}

#[test]
fn error_response_carries_backend_message() {
    let result = interpret_auth_payload(
        false,
        payload(None, None, Some("Invalid email or password")),
        "Login failed",
    );
    assert_eq!(
        result,
        Err(AuthError::Rejected("Invalid email or password".to_owned()))
    );
}

#[test]
fn error_response_without_message_uses_fallback() {
    let result = interpret_auth_payload(false, payload(None, None, None), "Signup failed");
    assert_eq!(result, Err(AuthError::Rejected("Signup failed".to_owned())));
}

#[test]
fn token_in_failed_transport_is_still_rejected() {
    let result = interpret_auth_payload(false, payload(Some("tok"), Some("Asha"), None), "Login failed");
    assert!(result.is_err());
}

// =============================================================
// Verify status interpretation
// =============================================================

#[test]
fn verify_2xx_is_valid() {
    assert_eq!(interpret_verify_status(200), VerifyOutcome::Valid);
    assert_eq!(interpret_verify_status(204), VerifyOutcome::Valid);
}

#[test]
fn verify_401_is_invalid() {
    assert_eq!(interpret_verify_status(401), VerifyOutcome::Invalid);
}

#[test]
fn verify_other_statuses_are_unknown() {
    assert_eq!(interpret_verify_status(403), VerifyOutcome::Unknown);
    assert_eq!(interpret_verify_status(500), VerifyOutcome::Unknown);
    assert_eq!(interpret_verify_status(503), VerifyOutcome::Unknown);
}

// =============================================================
// AuthClient against the store (no browser; transport is
// unavailable, which exercises the fail-open paths)
// =============================================================

fn seeded_client() -> AuthClient {
    let backend = MemoryStorage::default();
    let store = SessionStore::new(backend);
    store.save(
        &UserRecord {
            name: "Asha Mwangi".to_owned(),
            email: "asha@example.com".to_owned(),
            extra: std::collections::BTreeMap::new(),
        },
        "tok-123",
    );
    AuthClient::new(store)
}

#[test]
fn verify_without_token_is_invalid_without_network() {
    let client = AuthClient::new(SessionStore::new(MemoryStorage::default()));
    assert_eq!(block_on(client.verify()), VerifyOutcome::Invalid);
}

#[test]
fn verify_on_network_failure_is_unknown_and_preserves_session() {
    let client = seeded_client();
    assert_eq!(block_on(client.verify()), VerifyOutcome::Unknown);
    assert!(client.store().load().is_valid());
}

#[test]
fn failed_login_leaves_existing_session_untouched() {
    let client = seeded_client();
    let result = block_on(client.login("other@example.com", "pw"));
    assert_eq!(result, Err(AuthError::Network));
    assert_eq!(client.store().load().first_name(), "Asha");
}

#[test]
fn logout_clears_session_and_signals_landing_page() {
    let client = seeded_client();
    assert_eq!(client.logout(), "/");
    assert_eq!(client.store().load(), Session::empty());
}
