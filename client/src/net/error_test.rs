use super::*;
use schema::CONNECTION_ERROR;
use serde_json::json;

#[test]
fn connection_failure_maps_to_network() {
    let err = ApiError::from_response(&ApiResponse::connection_error(), "x");
    assert_eq!(err, ApiError::Network);
    assert_eq!(err.to_string(), CONNECTION_ERROR);
    assert_eq!(err.status(), Some(0));
}

#[test]
fn http_error_prefers_backend_message() {
    let resp = ApiResponse::new(400, json!({ "error": "Sample no encontrado" }));
    let err = ApiError::from_response(&resp, "fallback");
    assert_eq!(err.to_string(), "Sample no encontrado");
    assert_eq!(err.status(), Some(400));
}

#[test]
fn http_error_uses_fallback_without_message() {
    let resp = ApiResponse::new(500, json!({}));
    assert_eq!(ApiError::from_response(&resp, "Error en el registro").to_string(), "Error en el registro");
}

#[test]
fn http_error_keeps_field_errors() {
    let resp = ApiResponse::new(400, json!({ "correo": ["Ya registrado."] }));
    let err = ApiError::from_response(&resp, "x");
    let fields = err.fields().expect("fields present");
    assert_eq!(fields.get("correo").map(String::as_str), Some("Ya registrado."));
}

#[test]
fn unauthorized_detects_401_and_403() {
    let resp = ApiResponse::new(403, json!({}));
    assert!(ApiError::from_response(&resp, "x").is_unauthorized());
    assert!(!ApiError::Timeout.is_unauthorized());
}

#[test]
fn schema_error_converts_to_decode() {
    let err: ApiError = schema::SchemaError::MissingField("user").into();
    assert!(matches!(err, ApiError::Decode(msg) if msg.contains("user")));
}
