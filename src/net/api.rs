//! Raw fetch helpers for the Viva Utalii backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs reporting a network failure, since these
//! endpoints are only meaningful in the browser.
//!
//! This module does transport only. Deciding what a response *means*
//! (token present, explicit rejection, fail-open verify) happens in
//! [`crate::net::auth`].

#![allow(clippy::unused_async)]

use super::types::{AuthError, AuthPayload, LoginRequest, SignupRequest};

/// Base URL of the hosted backend.
pub const BACKEND_URL: &str = "https://viva-backend-p91j.onrender.com";

/// Transport-level view of a login/signup response: whether the HTTP
/// status was successful, plus the parsed payload.
#[derive(Clone, Debug)]
pub struct AuthResponse {
    pub transport_ok: bool,
    pub payload: AuthPayload,
}

/// `POST /login` with credentials.
///
/// # Errors
///
/// `AuthError::Network` on transport failure or an unreadable body.
pub async fn post_login(req: &LoginRequest) -> Result<AuthResponse, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        post_auth("/login", req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(AuthError::Network)
    }
}

/// `POST /signup` with the new account details.
///
/// # Errors
///
/// `AuthError::Network` on transport failure or an unreadable body.
pub async fn post_signup(req: &SignupRequest) -> Result<AuthResponse, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        post_auth("/signup", req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(AuthError::Network)
    }
}

/// `GET /verify-token` with the bearer token. Returns the HTTP status.
///
/// # Errors
///
/// `AuthError::Network` on transport failure (the caller treats this
/// as inconclusive, not as a rejection).
pub async fn get_verify_token(token: &str) -> Result<u16, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{BACKEND_URL}/verify-token");
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|_| AuthError::Network)?;
        Ok(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(AuthError::Network)
    }
}

#[cfg(feature = "hydrate")]
async fn post_auth<B: serde::Serialize>(path: &str, body: &B) -> Result<AuthResponse, AuthError> {
    let url = format!("{BACKEND_URL}{path}");
    let resp = gloo_net::http::Request::post(&url)
        .json(body)
        .map_err(|_| AuthError::Network)?
        .send()
        .await
        .map_err(|_| AuthError::Network)?;

    let transport_ok = resp.ok();
    let payload = resp
        .json::<AuthPayload>()
        .await
        .map_err(|_| AuthError::Network)?;

    Ok(AuthResponse {
        transport_ok,
        payload,
    })
}
