use super::*;

fn store() -> (SessionStore, MemoryStorage) {
    let backend = MemoryStorage::default();
    (SessionStore::new(backend.clone()), backend)
}

fn user() -> UserRecord {
    UserRecord {
        name: "Asha Mwangi".to_owned(),
        email: "asha@example.com".to_owned(),
        extra: std::collections::BTreeMap::new(),
    }
}

// =============================================================
// Save / load round trip
// =============================================================

#[test]
fn load_on_fresh_store_is_empty() {
    let (store, _) = store();
    assert_eq!(store.load(), Session::empty());
}

#[test]
fn save_then_load_returns_same_session() {
    let (store, _) = store();
    store.save(&user(), "tok-123");
    assert_eq!(store.load(), Session::new(user(), "tok-123".to_owned()));
}

#[test]
fn token_reads_stored_token() {
    let (store, _) = store();
    assert_eq!(store.token(), None);
    store.save(&user(), "tok-123");
    assert_eq!(store.token(), Some("tok-123".to_owned()));
}

// =============================================================
// Partial presence
// =============================================================

#[test]
fn missing_token_loads_as_empty_and_drops_dangling_user() {
    let (store, backend) = store();
    store.save(&user(), "tok-123");
    backend.remove(TOKEN_KEY);
    assert_eq!(store.load(), Session::empty());
    assert_eq!(backend.get(USER_KEY), None);
}

#[test]
fn missing_user_loads_as_empty_and_drops_dangling_token() {
    let (store, backend) = store();
    store.save(&user(), "tok-123");
    backend.remove(USER_KEY);
    assert_eq!(store.load(), Session::empty());
    assert_eq!(backend.get(TOKEN_KEY), None);
}

// =============================================================
// Corruption self-healing
// =============================================================

#[test]
fn corrupted_user_record_loads_as_empty_and_clears_keys() {
    let (store, backend) = store();
    backend.set(USER_KEY, "{not valid json");
    backend.set(TOKEN_KEY, "tok-123");

    assert_eq!(store.load(), Session::empty());
    assert_eq!(backend.get(USER_KEY), None);
    assert_eq!(backend.get(TOKEN_KEY), None);
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_then_load_is_empty() {
    let (store, _) = store();
    store.save(&user(), "tok-123");
    store.clear();
    assert_eq!(store.load(), Session::empty());
}

#[test]
fn clear_removes_legacy_alias_keys() {
    let (store, backend) = store();
    backend.set("auth_token", "old-token");
    backend.set("user_data", "{}");

    store.clear();

    assert_eq!(backend.get("auth_token"), None);
    assert_eq!(backend.get("user_data"), None);
}
