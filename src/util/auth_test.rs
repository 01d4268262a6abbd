use super::*;
use crate::net::types::UserRecord;

fn signed_in(loading: bool) -> SessionSnapshot {
    SessionSnapshot {
        user: Some(UserRecord {
            id: 1,
            username: "testuser".to_owned(),
            email: "test@example.com".to_owned(),
            first_name: String::new(),
            last_name: String::new(),
        }),
        token: Some("abc".to_owned()),
        loading,
    }
}

fn signed_out(loading: bool) -> SessionSnapshot {
    SessionSnapshot { user: None, token: None, loading }
}

// =============================================================
// RouteGuard::evaluate
// =============================================================

#[test]
fn loading_shows_placeholder_when_signed_out() {
    let guard = RouteGuard::new("/login");
    assert_eq!(guard.evaluate(&signed_out(true)), GuardDecision::ShowPlaceholder);
}

#[test]
fn loading_shows_placeholder_even_when_signed_in() {
    let guard = RouteGuard::new("/login");
    assert_eq!(guard.evaluate(&signed_in(true)), GuardDecision::ShowPlaceholder);
}

#[test]
fn signed_out_redirects_to_login_with_replace() {
    let guard = RouteGuard::new("/login");
    assert_eq!(
        guard.evaluate(&signed_out(false)),
        GuardDecision::Redirect { to: "/login".to_owned(), replace: true }
    );
}

#[test]
fn half_populated_session_redirects() {
    let guard = RouteGuard::new("/login");
    let snap = SessionSnapshot { token: Some("abc".to_owned()), ..signed_out(false) };
    assert!(matches!(guard.evaluate(&snap), GuardDecision::Redirect { .. }));
}

#[test]
fn signed_in_renders_protected() {
    let guard = RouteGuard::new("/login");
    assert_eq!(guard.evaluate(&signed_in(false)), GuardDecision::RenderProtected);
}

#[test]
fn redirect_uses_configured_login_path() {
    let guard = RouteGuard::new("/auth/sign-in");
    assert_eq!(guard.login_path(), "/auth/sign-in");
    assert_eq!(
        guard.evaluate(&signed_out(false)),
        GuardDecision::Redirect { to: "/auth/sign-in".to_owned(), replace: true }
    );
}

// =============================================================
// navigate_options
// =============================================================

#[test]
fn redirect_navigation_replaces_history_entry() {
    let guard = RouteGuard::new("/login");
    let options = guard.evaluate(&signed_out(false)).navigate_options().unwrap();
    assert!(options.replace);
}

#[test]
fn non_redirect_decisions_have_no_navigation() {
    assert!(GuardDecision::ShowPlaceholder.navigate_options().is_none());
    assert!(GuardDecision::RenderProtected.navigate_options().is_none());
}

// =============================================================
// should_leave_login
// =============================================================

#[test]
fn login_page_stays_while_loading_or_signed_out() {
    assert!(!should_leave_login(&signed_in(true)));
    assert!(!should_leave_login(&signed_out(false)));
}

#[test]
fn login_page_leaves_when_signed_in() {
    assert!(should_leave_login(&signed_in(false)));
}
