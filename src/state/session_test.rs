use super::*;

fn user() -> UserRecord {
    UserRecord {
        id: 1,
        username: "testuser".to_owned(),
        email: "test@example.com".to_owned(),
        first_name: String::new(),
        last_name: String::new(),
    }
}

// =============================================================
// SessionSnapshot defaults
// =============================================================

#[test]
fn default_snapshot_is_loading() {
    assert!(SessionSnapshot::default().loading);
}

#[test]
fn default_snapshot_is_unauthenticated() {
    let snap = SessionSnapshot::default();
    assert!(snap.user.is_none());
    assert!(snap.token.is_none());
    assert!(!snap.is_authenticated());
}

// =============================================================
// sign_in / sign_out
// =============================================================

#[test]
fn sign_in_sets_user_and_token_together() {
    let mut snap = SessionSnapshot::default();
    snap.sign_in("abc".to_owned(), user());
    assert_eq!(snap.token.as_deref(), Some("abc"));
    assert_eq!(snap.user, Some(user()));
    assert!(snap.is_authenticated());
}

#[test]
fn sign_out_clears_user_and_token_together() {
    let mut snap = SessionSnapshot { loading: false, ..SessionSnapshot::default() };
    snap.sign_in("abc".to_owned(), user());
    snap.sign_out();
    assert!(snap.user.is_none());
    assert!(snap.token.is_none());
    assert!(!snap.loading);
}

#[test]
fn token_without_user_is_not_authenticated() {
    let snap = SessionSnapshot { token: Some("abc".to_owned()), ..SessionSnapshot::default() };
    assert!(!snap.is_authenticated());
}

// =============================================================
// LoginOutcome
// =============================================================

#[test]
fn login_outcome_accessors() {
    assert!(LoginOutcome::Success.is_success());
    assert_eq!(LoginOutcome::Success.error(), None);
    let failed = LoginOutcome::Failure { error: "nope".to_owned() };
    assert!(!failed.is_success());
    assert_eq!(failed.error(), Some("nope"));
}
