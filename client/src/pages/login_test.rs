use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  a@x.com ", "secret"),
        Ok(("a@x.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err(MISSING_CREDENTIALS_MESSAGE));
    assert_eq!(validate_login_input("a@x.com", ""), Err(MISSING_CREDENTIALS_MESSAGE));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(validate_login_input("a@x.com", " pw "), Ok(("a@x.com".to_owned(), " pw ".to_owned())));
}

#[test]
fn login_error_message_prefers_server_message() {
    let err = ApiError::Status { status: 401, message: Some("Credenciales inválidas".to_owned()) };
    assert_eq!(login_error_message(&err), "Credenciales inválidas");
}

#[test]
fn login_error_message_falls_back_to_generic() {
    assert_eq!(login_error_message(&ApiError::Timeout), LOGIN_FAILED_MESSAGE);
    assert_eq!(login_error_message(&ApiError::Status { status: 500, message: None }), LOGIN_FAILED_MESSAGE);
}
