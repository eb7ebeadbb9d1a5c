use super::*;
use serde_json::json;

fn failed(resp: &ApiResponse) -> LoginErrors {
    match interpret_login(resp) {
        LoginOutcome::Failed(errors) => errors,
        LoginOutcome::Success { .. } => panic!("expected failure"),
    }
}

// =============================================================
// interpret_login
// =============================================================

#[test]
fn success_requires_ok_success_and_token() {
    let resp = ApiResponse::new(200, json!({ "success": true, "token": "abc" }));
    assert_eq!(interpret_login(&resp), LoginOutcome::Success { token: "abc".to_owned() });

    let no_token = ApiResponse::new(200, json!({ "success": true }));
    assert!(matches!(interpret_login(&no_token), LoginOutcome::Failed(_)));

    let no_flag = ApiResponse::new(200, json!({ "token": "abc" }));
    assert!(matches!(interpret_login(&no_flag), LoginOutcome::Failed(_)));
}

#[test]
fn username_errors_map_to_email_field() {
    let errors = failed(&ApiResponse::new(400, json!({ "username": ["Requerido", "Formato inválido"] })));
    assert_eq!(errors.email, "Requerido Formato inválido");
    assert!(errors.password.is_empty());
    assert!(errors.global.is_empty());
}

#[test]
fn password_errors_map_to_password_field() {
    let errors = failed(&ApiResponse::new(400, json!({ "password": "Muy corta" })));
    assert_eq!(errors.password, "Muy corta");
}

#[test]
fn invalid_credentials_mark_both_fields() {
    let errors = failed(&ApiResponse::new(401, json!({ "detail": "Credenciales inválidas" })));
    assert_eq!(errors.email, FIELD_MARKER);
    assert_eq!(errors.password, FIELD_MARKER);
    assert!(errors.global.is_empty());
    assert_eq!(LoginErrors::visible(&errors.email), None);
}

#[test]
fn detail_and_error_are_joined() {
    let errors = failed(&ApiResponse::new(500, json!({ "detail": "Uno.", "error": "Dos." })));
    assert_eq!(errors.global, "Uno. Dos.");
    assert!(errors.email.is_empty());
}

#[test]
fn empty_failure_uses_default_message() {
    let errors = failed(&ApiResponse::new(500, json!({})));
    assert_eq!(errors.global, LOGIN_FAILED);
}

#[test]
fn connection_failure_has_dedicated_message() {
    let errors = failed(&ApiResponse::connection_error());
    assert_eq!(errors.global, BACKEND_UNREACHABLE);
    assert!(errors.email.is_empty());
}

// =============================================================
// LoginState
// =============================================================

#[test]
fn editing_a_field_clears_its_error() {
    let mut state = LoginState::default();
    assert!(!state.validate());
    assert!(!state.errors.email.is_empty());
    state.set_field(LoginField::Email, "ana@sequoh.cl".to_owned());
    assert!(state.errors.email.is_empty());
    assert!(!state.errors.password.is_empty());
    state.set_field(LoginField::Password, "x".to_owned());
    assert!(state.validate());
}
