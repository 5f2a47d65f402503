#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::state::session::{Session, UserRecord};

/// Primary key for the serialized [`UserRecord`].
pub const USER_KEY: &str = "vivaUtalii_user";
/// Primary key for the bearer token.
pub const TOKEN_KEY: &str = "vivaUtalii_token";

/// Keys written by earlier site revisions, removed on every `clear`.
const LEGACY_KEYS: &[&str] = &["auth_token", "user_data"];

/// Minimal string key-value storage the session store runs on.
///
/// Browser builds use `localStorage`; tests and the SSR stub use an
/// in-memory map. All operations are infallible from the caller's
/// perspective — a storage failure behaves like an absent key.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory backend for tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.lock().unwrap().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items.lock().unwrap().remove(key);
    }
}

/// `localStorage` backend. Requires a browser environment; every
/// operation degrades to a no-op when the window or storage is
/// unavailable.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Persistence for the session's two keys. No network or DOM access —
/// pure storage abstraction over a [`StorageBackend`].
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend + Send + Sync>,
}

impl SessionStore {
    pub fn new(backend: impl StorageBackend + Send + Sync + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Store backed by `localStorage` in the browser, by an in-memory
    /// map otherwise.
    pub fn browser() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(LocalStorage)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::new(MemoryStorage::default())
        }
    }

    /// Read the persisted session. Never errors: partial presence
    /// (one key without the other) counts as logged out and drops the
    /// dangling key, and a user record that fails to parse clears both
    /// keys and yields an empty session (self-healing against
    /// corrupted storage).
    pub fn load(&self) -> Session {
        let (Some(user_json), Some(token)) =
            (self.backend.get(USER_KEY), self.backend.get(TOKEN_KEY))
        else {
            self.backend.remove(USER_KEY);
            self.backend.remove(TOKEN_KEY);
            return Session::empty();
        };

        match serde_json::from_str::<UserRecord>(&user_json) {
            Ok(user) => Session::new(user, token),
            Err(_) => {
                self.backend.remove(USER_KEY);
                self.backend.remove(TOKEN_KEY);
                Session::empty()
            }
        }
    }

    /// Persist a freshly authenticated session under both keys.
    pub fn save(&self, user: &UserRecord, token: &str) {
        if let Ok(json) = serde_json::to_string(user) {
            self.backend.set(USER_KEY, &json);
            self.backend.set(TOKEN_KEY, token);
        }
    }

    /// Remove both primary keys and the deprecated aliases kept for
    /// backward compatibility.
    pub fn clear(&self) {
        self.backend.remove(USER_KEY);
        self.backend.remove(TOKEN_KEY);
        for key in LEGACY_KEYS {
            self.backend.remove(key);
        }
    }

    /// The stored bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }
}
