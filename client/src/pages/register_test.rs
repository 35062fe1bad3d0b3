use super::*;

#[test]
fn validate_register_input_trims_identity_fields() {
    assert_eq!(
        validate_register_input(" a@b.com ", " writer ", "pw"),
        Ok(RegisterRequest { email: "a@b.com".to_owned(), username: "writer".to_owned(), password: "pw".to_owned() })
    );
}

#[test]
fn validate_register_input_requires_every_field() {
    assert_eq!(
        validate_register_input("", " ", ""),
        Err(RegisterFieldErrors {
            email: Some(EMAIL_REQUIRED),
            username: Some(USERNAME_REQUIRED),
            password: Some(PASSWORD_REQUIRED),
        })
    );
}

#[test]
fn validate_register_input_flags_only_missing_username() {
    assert_eq!(
        validate_register_input("a@b.com", "", "pw"),
        Err(RegisterFieldErrors { username: Some(USERNAME_REQUIRED), ..RegisterFieldErrors::default() })
    );
}
