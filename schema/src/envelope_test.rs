use super::*;
use serde_json::json;

// =============================================================
// Construction
// =============================================================

#[test]
fn new_derives_ok_from_status() {
    assert!(ApiResponse::new(200, json!({})).ok);
    assert!(ApiResponse::new(201, json!({})).ok);
    assert!(!ApiResponse::new(400, json!({})).ok);
    assert!(!ApiResponse::new(302, json!({})).ok);
}

#[test]
fn connection_error_has_status_zero_and_message() {
    let resp = ApiResponse::connection_error();
    assert!(!resp.ok);
    assert!(resp.is_connection_error());
    assert_eq!(resp.error_message().as_deref(), Some(CONNECTION_ERROR));
}

#[test]
fn unauthorized_covers_401_and_403() {
    assert!(ApiResponse::new(401, json!({})).is_unauthorized());
    assert!(ApiResponse::new(403, json!({})).is_unauthorized());
    assert!(!ApiResponse::new(404, json!({})).is_unauthorized());
}

// =============================================================
// Messages
// =============================================================

#[test]
fn error_message_prefers_error_over_detail() {
    let resp = ApiResponse::new(400, json!({ "detail": "d", "error": "e" }));
    assert_eq!(resp.error_message().as_deref(), Some("e"));
}

#[test]
fn error_message_falls_back_to_detail_then_message() {
    let resp = ApiResponse::new(401, json!({ "detail": "Token inválido" }));
    assert_eq!(resp.error_message().as_deref(), Some("Token inválido"));
    let resp = ApiResponse::new(500, json!({ "message": "boom" }));
    assert_eq!(resp.error_message().as_deref(), Some("boom"));
}

#[test]
fn error_message_skips_blank_values() {
    let resp = ApiResponse::new(400, json!({ "error": "  ", "detail": "real" }));
    assert_eq!(resp.error_message().as_deref(), Some("real"));
    assert_eq!(ApiResponse::new(400, json!({})).error_message(), None);
}

#[test]
fn messages_collects_detail_and_error() {
    let resp = ApiResponse::new(400, json!({ "detail": "a", "error": ["b", "c"] }));
    assert_eq!(resp.messages(), vec!["a".to_owned(), "b c".to_owned()]);
}

#[test]
fn field_errors_joins_arrays_and_skips_message_keys() {
    let resp = ApiResponse::new(
        400,
        json!({
            "email": ["Ya existe.", "Inválido."],
            "password": "Muy corta",
            "error": "ignored",
            "success": false,
            "count": 3
        }),
    );
    let fields = resp.field_errors();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields.get("email").map(String::as_str), Some("Ya existe. Inválido."));
    assert_eq!(fields.get("password").map(String::as_str), Some("Muy corta"));
}

#[test]
fn field_errors_empty_for_non_object_body() {
    assert!(ApiResponse::new(400, json!(["x"])).field_errors().is_empty());
}

// =============================================================
// Decoding
// =============================================================

#[derive(Debug, serde::Deserialize, PartialEq)]
struct Count {
    count: u32,
}

#[test]
fn decode_payload_unwraps_nested_data() {
    let nested = ApiResponse::new(200, json!({ "data": { "count": 4 } }));
    assert_eq!(nested.decode_payload::<Count>().ok(), Some(Count { count: 4 }));
    let flat = ApiResponse::new(200, json!({ "count": 2 }));
    assert_eq!(flat.decode_payload::<Count>().ok(), Some(Count { count: 2 }));
}

#[test]
fn decode_field_reports_missing_key() {
    let resp = ApiResponse::new(200, json!({ "other": 1 }));
    let err = resp.decode_field::<Count>("user").unwrap_err();
    assert!(matches!(err, SchemaError::MissingField("user")));
}

#[test]
fn decode_reports_type_mismatch() {
    let resp = ApiResponse::new(200, json!({ "count": "many" }));
    assert!(matches!(resp.decode::<Count>(), Err(SchemaError::Decode(_))));
}

#[test]
fn flag_and_str_field_read_top_level_keys() {
    let resp = ApiResponse::new(200, json!({ "success": true, "token": "abc", "empty": "" }));
    assert!(resp.flag("success"));
    assert!(!resp.flag("missing"));
    assert_eq!(resp.str_field("token"), Some("abc"));
    assert_eq!(resp.str_field("empty"), None);
}
