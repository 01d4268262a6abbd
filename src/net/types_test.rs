use super::*;

fn user(first: &str, last: &str) -> UserRecord {
    UserRecord {
        id: 7,
        username: "mara".to_owned(),
        email: "mara@example.com".to_owned(),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
    }
}

// =============================================================
// display_name
// =============================================================

#[test]
fn display_name_joins_first_and_last() {
    assert_eq!(user("Mara", "Lind").display_name(), "Mara Lind");
}

#[test]
fn display_name_uses_single_present_name() {
    assert_eq!(user("Mara", "").display_name(), "Mara");
    assert_eq!(user("", "Lind").display_name(), "Lind");
}

#[test]
fn display_name_falls_back_to_username() {
    assert_eq!(user("  ", "").display_name(), "mara");
}

// =============================================================
// serde
// =============================================================

#[test]
fn user_record_missing_names_default_to_empty() {
    let raw = r#"{"id":1,"username":"testuser","email":"t@example.com"}"#;
    let parsed: UserRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.first_name, "");
    assert_eq!(parsed.last_name, "");
}

#[test]
fn auth_grant_parses_login_response() {
    let raw = r#"{
        "token": "abc",
        "user": {"id": 1, "username": "testuser", "email": "t@example.com",
                 "first_name": "Test", "last_name": "User"}
    }"#;
    let grant: AuthGrant = serde_json::from_str(raw).unwrap();
    assert_eq!(grant.token, "abc");
    assert_eq!(grant.user.id, 1);
    assert_eq!(grant.user.display_name(), "Test User");
}

#[test]
fn login_request_serializes_credentials() {
    let body = serde_json::to_value(LoginRequest { username: "u", password: "p" }).unwrap();
    assert_eq!(body, serde_json::json!({"username": "u", "password": "p"}));
}
