use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  testuser ", "testpass123"),
        Ok(("testuser".to_owned(), "testpass123".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("testuser", " pass "),
        Ok(("testuser".to_owned(), " pass ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_username() {
    assert_eq!(validate_login_input("   ", "testpass123"), Err(MISSING_CREDENTIALS));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("testuser", ""), Err(MISSING_CREDENTIALS));
}
