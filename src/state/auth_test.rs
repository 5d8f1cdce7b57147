use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated);
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.is_loading);
}

#[test]
fn auth_state_token_reads_through_user() {
    let state = AuthState {
        is_authenticated: true,
        is_loading: false,
        user: Some(User::placeholder(Some("abc".to_owned()))),
    };
    assert_eq!(state.token(), Some("abc"));
    assert_eq!(AuthState::default().token(), None);
}

// =============================================================
// User constructors
// =============================================================

#[test]
fn placeholder_user_has_fixed_identity() {
    let user = User::placeholder(None);
    assert_eq!(user.id, "5e86809283e28b96d2d38537");
    assert_eq!(user.avatar, "/assets/avatars/default-avatar.png");
    assert_eq!(user.name, "Oktopus");
    assert_eq!(user.email, "anika.visser@devias.io");
    assert!(user.token.is_none());
}

#[test]
fn signed_in_user_carries_email_and_token() {
    let user = User::signed_in("a@b.com", "tok123".to_owned());
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.name, "ZNID");
    assert_eq!(user.token.as_deref(), Some("tok123"));
}

#[test]
fn user_serializes_without_absent_token() {
    let json = serde_json::to_value(User::placeholder(None)).unwrap();
    assert!(json.get("token").is_none());
    assert_eq!(json["name"], "Oktopus");
}

#[test]
fn user_deserializes_with_missing_token() {
    let user: User = serde_json::from_str(
        r#"{"id":"u1","avatar":"/a.png","name":"Alice","email":"alice@example.com"}"#,
    )
    .unwrap();
    assert_eq!(user.id, "u1");
    assert!(user.token.is_none());
}
