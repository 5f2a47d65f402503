use super::*;

fn user(name: &str) -> UserRecord {
    UserRecord {
        name: name.to_owned(),
        email: "test@example.com".to_owned(),
        extra: BTreeMap::new(),
    }
}

// =============================================================
// Session validity
// =============================================================

#[test]
fn empty_session_is_not_valid() {
    assert!(!Session::empty().is_valid());
}

#[test]
fn session_with_user_and_token_is_valid() {
    let session = Session::new(user("Asha Mwangi"), "tok-123".to_owned());
    assert!(session.is_valid());
}

#[test]
fn session_with_only_user_is_not_valid() {
    let session = Session {
        user: Some(user("Asha Mwangi")),
        token: None,
    };
    assert!(!session.is_valid());
}

#[test]
fn session_with_only_token_is_not_valid() {
    let session = Session {
        user: None,
        token: Some("tok-123".to_owned()),
    };
    assert!(!session.is_valid());
}

#[test]
fn session_with_empty_token_is_not_valid() {
    let session = Session::new(user("Asha Mwangi"), String::new());
    assert!(!session.is_valid());
}

// =============================================================
// First name
// =============================================================

#[test]
fn first_name_is_first_word_of_full_name() {
    let session = Session::new(user("Asha Mwangi"), "tok".to_owned());
    assert_eq!(session.first_name(), "Asha");
}

#[test]
fn first_name_falls_back_to_profile_for_empty_name() {
    let session = Session::new(user(""), "tok".to_owned());
    assert_eq!(session.first_name(), "Profile");
}

#[test]
fn first_name_falls_back_to_profile_when_logged_out() {
    assert_eq!(Session::empty().first_name(), "Profile");
}

// =============================================================
// NavView render model
// =============================================================

#[test]
fn nav_view_anonymous_for_empty_session() {
    assert_eq!(NavView::from_session(&Session::empty()), NavView::Anonymous);
}

#[test]
fn nav_view_anonymous_for_partial_session() {
    let session = Session {
        user: Some(user("Asha Mwangi")),
        token: None,
    };
    assert_eq!(NavView::from_session(&session), NavView::Anonymous);
}

#[test]
fn nav_view_authenticated_shows_first_name() {
    let session = Session::new(user("Asha Mwangi"), "tok".to_owned());
    assert_eq!(
        NavView::from_session(&session),
        NavView::Authenticated {
            first_name: "Asha".to_owned()
        }
    );
}

#[test]
fn nav_view_is_stable_across_repeated_renders() {
    let session = Session::new(user("Asha Mwangi"), "tok".to_owned());
    assert_eq!(
        NavView::from_session(&session),
        NavView::from_session(&session)
    );
}

// =============================================================
// UserRecord serialization
// =============================================================

#[test]
fn user_record_preserves_opaque_fields() {
    let json = r#"{"name":"Asha Mwangi","email":"a@b.com","id":42,"plan":"gold"}"#;
    let record: UserRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.name, "Asha Mwangi");
    assert_eq!(record.extra.get("id"), Some(&serde_json::json!(42)));

    let round = serde_json::to_string(&record).unwrap();
    let again: UserRecord = serde_json::from_str(&round).unwrap();
    assert_eq!(record, again);
}

#[test]
fn user_record_tolerates_missing_fields() {
    let record: UserRecord = serde_json::from_str("{}").unwrap();
    assert!(record.name.is_empty());
    assert!(record.email.is_empty());
}
