#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A user as returned by the backend and persisted locally.
///
/// Replaced wholesale on every login/signup; never mutated in place.
/// Fields beyond `name` and `email` are opaque to the client and
/// survive a serialization round trip untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// The logged-in/logged-out state derived from the stored user record
/// and bearer token.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<UserRecord>,
    pub token: Option<String>,
}

impl Session {
    /// An empty (logged-out) session.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(user: UserRecord, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
        }
    }

    /// A session is valid only when both the user record and a
    /// non-empty token are present. Partial presence counts as
    /// logged out.
    pub fn is_valid(&self) -> bool {
        self.user.is_some() && self.token.as_ref().is_some_and(|t| !t.is_empty())
    }

    /// First word of the user's name for the compact profile button,
    /// falling back to "Profile" when the name is empty.
    pub fn first_name(&self) -> String {
        self.user
            .as_ref()
            .and_then(|u| u.name.split_whitespace().next())
            .unwrap_or("Profile")
            .to_owned()
    }
}

/// Structured render model for the auth slots in the navigation bar.
///
/// Components consume this instead of poking at session internals, so
/// rendering the same session twice always yields the same view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavView {
    /// Sign In / Sign Up controls.
    Anonymous,
    /// Profile control showing the user's first name.
    Authenticated { first_name: String },
}

impl NavView {
    pub fn from_session(session: &Session) -> Self {
        if session.is_valid() {
            Self::Authenticated {
                first_name: session.first_name(),
            }
        } else {
            Self::Anonymous
        }
    }
}

/// Reactive session holder provided via context.
///
/// `verifying` is set while the background token check is in flight so
/// pages can avoid redirect decisions on a not-yet-restored session.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub session: Session,
    pub verifying: bool,
}
