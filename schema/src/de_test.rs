use super::*;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(default, deserialize_with = "string")]
    text: String,
    #[serde(default, deserialize_with = "opt_string")]
    maybe: Option<String>,
    #[serde(default, deserialize_with = "opt_f64")]
    float: Option<f64>,
    #[serde(default, deserialize_with = "i64_or_zero")]
    int: i64,
    #[serde(default, deserialize_with = "null_default")]
    list: Vec<String>,
}

fn row(value: serde_json::Value) -> Row {
    serde_json::from_value(value).expect("row should decode")
}

#[test]
fn string_accepts_numbers_and_null() {
    assert_eq!(row(json!({ "text": 15 })).text, "15");
    assert_eq!(row(json!({ "text": null })).text, "");
    assert_eq!(row(json!({})).text, "");
    assert_eq!(row(json!({ "text": "X" })).text, "X");
}

#[test]
fn opt_string_maps_empty_to_none() {
    assert_eq!(row(json!({ "maybe": "" })).maybe, None);
    assert_eq!(row(json!({ "maybe": "SC-1" })).maybe.as_deref(), Some("SC-1"));
}

#[test]
fn opt_f64_accepts_numeric_strings() {
    assert_eq!(row(json!({ "float": "0.25" })).float, Some(0.25));
    assert_eq!(row(json!({ "float": 1.5 })).float, Some(1.5));
    assert_eq!(row(json!({ "float": "n/a" })).float, None);
    assert_eq!(row(json!({ "float": null })).float, None);
}

#[test]
fn i64_or_zero_accepts_whole_floats_and_strings() {
    assert_eq!(row(json!({ "int": 12.0 })).int, 12);
    assert_eq!(row(json!({ "int": "345" })).int, 345);
    assert_eq!(row(json!({ "int": 1.5 })).int, 0);
    assert_eq!(row(json!({})).int, 0);
}

#[test]
fn null_default_replaces_null_list() {
    assert!(row(json!({ "list": null })).list.is_empty());
    assert_eq!(row(json!({ "list": ["a"] })).list, vec!["a".to_owned()]);
}

#[test]
fn value_as_f64_rejects_non_scalars() {
    assert_eq!(value_as_f64(&json!([1])), None);
    assert_eq!(value_as_f64(&json!(" 3 ")), Some(3.0));
}
