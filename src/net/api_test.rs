use super::*;

#[test]
fn login_endpoint_formats_expected_path() {
    assert_eq!(login_endpoint("http://localhost:8000/api"), "http://localhost:8000/api/auth/login/");
}

#[test]
fn logout_endpoint_formats_expected_path() {
    assert_eq!(logout_endpoint("/api"), "/api/auth/logout/");
}

#[test]
fn register_endpoint_formats_expected_path() {
    assert_eq!(register_endpoint("/api"), "/api/auth/register/");
}

#[test]
fn token_header_uses_token_scheme() {
    assert_eq!(token_header_value("abc"), "Token abc");
}

#[test]
fn service_keeps_base_url() {
    let svc = HttpCredentialService::new("https://fin.example.com/api");
    assert_eq!(svc.base_url(), "https://fin.example.com/api");
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn native_build_reports_transport_error() {
    let svc = HttpCredentialService::new("/api");
    let err = svc.authenticate("u", "p").await.unwrap_err();
    assert!(matches!(err, CredentialError::Transport(_)));
    assert!(svc.revoke("abc").await.is_err());
    assert!(svc.register(&RegistrationRequest::default()).await.is_err());
}
