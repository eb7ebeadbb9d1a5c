#![cfg(not(feature = "csr"))]

use super::*;
use crate::test_util::block_on;
use serde_json::json;

// =============================================================
// Response interpretation
// =============================================================

#[test]
fn registration_reads_flag_and_message() {
    let resp = ApiResponse::new(201, json!({ "success": true, "requires_verification": true, "mensaje": "Revisa tu correo" }));
    let reg = registration_from_response(resp).unwrap();
    assert!(reg.requires_verification);
    assert_eq!(reg.message, "Revisa tu correo");
}

#[test]
fn registration_defaults_message() {
    let reg = registration_from_response(ApiResponse::new(201, json!({ "success": true }))).unwrap();
    assert!(!reg.requires_verification);
    assert_eq!(reg.message, "Usuario registrado exitosamente.");
}

#[test]
fn registration_failure_keeps_field_errors() {
    let resp = ApiResponse::new(400, json!({ "correo": ["Ya existe"], "error": "Datos inválidos" }));
    let err = registration_from_response(resp).unwrap_err();
    assert_eq!(err.to_string(), "Datos inválidos");
    assert_eq!(err.fields().unwrap().get("correo").map(String::as_str), Some("Ya existe"));
}

#[test]
fn registration_without_success_flag_uses_fallback() {
    let err = registration_from_response(ApiResponse::new(200, json!({}))).unwrap_err();
    assert_eq!(err.to_string(), "Error en el registro");
}

#[test]
fn message_response_prefers_backend_text() {
    let ok = message_from_response(ApiResponse::new(200, json!({ "message": "Listo" })), "def", "fail").unwrap();
    assert_eq!(ok, "Listo");
    let default = message_from_response(ApiResponse::new(200, json!({})), "def", "fail").unwrap();
    assert_eq!(default, "def");
    let err = message_from_response(ApiResponse::new(400, json!({})), "def", "fail").unwrap_err();
    assert_eq!(err.to_string(), "fail");
}

#[test]
fn profile_response_requires_user() {
    let resp = ApiResponse::new(200, json!({ "user": { "user_id": 4, "first_name": "Ana", "sample_code": "S-1" } }));
    let profile = profile_from_response(resp).unwrap();
    assert_eq!(profile.user_id, 4);
    assert_eq!(profile.sample_code, "S-1");
    let err = profile_from_response(ApiResponse::new(200, json!({}))).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

// =============================================================
// Offline transport
// =============================================================

#[test]
fn current_user_without_token_is_unauthorized() {
    let err = block_on(fetch_current_user()).unwrap_err();
    assert!(err.is_unauthorized());
}

#[test]
fn offline_calls_report_connection_error() {
    assert_eq!(block_on(list_variants()).unwrap_err(), ApiError::Network);
    assert_eq!(block_on(fetch_diseases()).unwrap_err(), ApiError::Network);
    assert_eq!(block_on(set_analyst(1, true)).unwrap_err(), ApiError::Network);
    let resp = block_on(login("a@b.cl", "x"));
    assert!(resp.is_connection_error());
}
